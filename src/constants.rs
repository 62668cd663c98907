//! Backdrop, follower and scroll tuning constants.
//!
//! Times are milliseconds on the `instant::now()` clock; distances are CSS
//! pixels.

// Depth simulation
pub const Z_MAX: f32 = 1000.0; // far plane of the pseudo-3D depth axis
pub const PERSPECTIVE_DEPTH: f32 = 1000.0; // scale = d / (d + z)
pub const DEPTH_ALPHA: f32 = 0.8; // alpha = scale * DEPTH_ALPHA
pub const Z_SPEED_FACTOR: f32 = 0.5; // z velocity in [0, speed * factor)

// Particle defaults
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const MAX_PARTICLE_COUNT: usize = 2000; // upper bound for data-particle-count
pub const DEFAULT_PARTICLE_SIZE: f32 = 3.0;
pub const DEFAULT_PARTICLE_SPEED: f32 = 0.1;
pub const PARTICLE_RADIUS_MIN_FRACTION: f32 = 0.5; // radius = size * [min, 1)
pub const DEFAULT_PALETTE: [&str; 4] = ["#FF5722", "#9C27B0", "#3F51B5", "#4CAF50"];

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 100.0; // px
pub const REPULSION_STRENGTH: f32 = 0.01; // impulse per px inside the radius
pub const POINTER_ACTIVE_WINDOW_MS: f64 = 500.0; // pointer counts as moving this long

// Viewport
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

// Pointer tracking
pub const DEFAULT_SMOOTH_FACTOR: f32 = 0.15;
pub const SAMPLE_THROTTLE_MS: f64 = 10.0; // ~100Hz ceiling on accepted samples
pub const IDLE_TIMEOUT_MS: f64 = 3000.0;

// Follower sizing (px)
pub const FOLLOWER_BASE_SIZE: f32 = 12.0;
pub const BUTTON_HOVER_SIZE: f32 = 40.0;
pub const LINK_HOVER_SIZE: f32 = 30.0;
pub const INPUT_HOVER_SIZE: f32 = 16.0;
pub const HOVER_ANCHOR_OFFSET: f32 = 20.0; // translate offset while hovering
pub const CLICK_SIZE_FACTOR: f32 = 0.8;
pub const CLICK_SCALE: f32 = 0.8;
pub const DEFAULT_FOLLOWER_COLOR: &str = "#FF5722";

// Follower opacity
pub const OPACITY_CLICKING: f32 = 0.9;
pub const OPACITY_HOVERING: f32 = 0.7;
pub const OPACITY_IDLE: f32 = 0.5;

// Click ripples
pub const RIPPLE_DURATION_MS: f64 = 600.0;
pub const RIPPLE_MAX_RADIUS: f32 = 50.0;
pub const RIPPLE_START_ALPHA: f32 = 0.7;
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;
pub const RIPPLE_CAPACITY: usize = 16;

// Smooth scrolling
pub const SCROLL_DURATION_MS: f64 = 1200.0;
pub const WHEEL_MULTIPLIER: f64 = 1.0;
pub const TOUCH_MULTIPLIER: f64 = 2.0;
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;

// Scroll reveal defaults ("fade up")
pub const DEFAULT_REVEAL_THRESHOLDS: [f32; 4] = [0.0, 0.2, 0.8, 1.0];
pub const DEFAULT_REVEAL_OPACITY: [f32; 4] = [0.0, 1.0, 1.0, 0.0];
pub const DEFAULT_REVEAL_OFFSET: [f32; 4] = [50.0, 0.0, 0.0, 50.0];
pub const IN_VIEW_THRESHOLD: f32 = 0.3;

// Frame loop
pub const MAX_FRAME_DT_MS: f64 = 100.0; // clamp after tab switches / stalls
