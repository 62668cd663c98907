use crate::constants::{POINTER_ACTIVE_WINDOW_MS, RESIZE_DEBOUNCE_MS};
use crate::core::clock::FrameTick;
use crate::core::config::BackdropConfig;
use crate::core::interaction::{follower_style, FollowerStyle, InteractionClassifier, InteractionState};
use crate::core::particles::ParticleField;
use crate::core::pointer::PointerTracker;
use crate::core::reveal::ScrollRevealMapper;
use crate::core::ripple::RippleSet;
use crate::core::scroll::SmoothScroller;
use crate::core::surface::{Bounds, DrawSurface};
use crate::core::timer::Deadline;
use glam::Vec2;

/// What the host has to apply after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Follower element style; `None` when the follower is disabled.
    pub follower: Option<FollowerStyle>,
    /// New page scroll offset while a smooth scroll is in flight.
    pub scroll_to: Option<f64>,
    /// Set on the frame that rebuilt the particle field.
    pub resized: Option<Bounds>,
}

/// All per-page animation state, shared between input callbacks and the
/// render tick.
///
/// Input handlers only record (`pointer_moved`, `viewport_resized`, ...);
/// everything time-based happens in [`BackdropState::frame`].
pub struct BackdropState {
    pub config: BackdropConfig,
    pub field: ParticleField,
    pub tracker: PointerTracker,
    pub classifier: InteractionClassifier,
    pub ripples: RippleSet,
    pub scroller: SmoothScroller,
    pub reveal: ScrollRevealMapper,
    pointer: Option<Vec2>,
    pointer_activity: Deadline,
    resize_debounce: Deadline,
    pending_bounds: Option<Bounds>,
    follower_enabled: bool,
}

impl BackdropState {
    /// `seed` makes the particle field reproducible; `None` uses entropy.
    pub fn new(
        config: BackdropConfig,
        bounds: Bounds,
        seed: Option<u64>,
        follower_enabled: bool,
    ) -> Self {
        let mut field = match seed {
            Some(seed) => ParticleField::new(config.particles.clone(), seed),
            None => ParticleField::from_entropy(config.particles.clone()),
        };
        field.initialize(bounds);
        Self {
            tracker: PointerTracker::new(&config.follower),
            scroller: SmoothScroller::new(config.scroll.clone()),
            classifier: InteractionClassifier::new(),
            ripples: RippleSet::default(),
            reveal: ScrollRevealMapper::new(),
            field,
            config,
            pointer: None,
            pointer_activity: Deadline::new(),
            resize_debounce: Deadline::new(),
            pending_bounds: None,
            follower_enabled,
        }
    }

    pub fn follower_enabled(&self) -> bool {
        self.follower_enabled
    }

    /// Raw pointer position used for particle repulsion.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        self.pointer = Some(Vec2::new(x, y));
        self.pointer_activity.arm(now_ms, POINTER_ACTIVE_WINDOW_MS);
        self.tracker.sample(x, y, now_ms)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) {
        self.tracker.pointer_down();
        if self.follower_enabled {
            self.ripples
                .spawn(Vec2::new(x, y), self.config.follower.color, now_ms);
        }
    }

    pub fn pointer_up(&mut self) {
        self.tracker.pointer_up();
    }

    /// Window focus or the pointer re-entering the page.
    pub fn pointer_entered(&mut self) {
        self.tracker.force_visible();
    }

    pub fn pointer_left(&mut self) {
        self.classifier.reset();
    }

    pub fn hover(&mut self, state: InteractionState) -> Option<InteractionState> {
        self.classifier.set(state)
    }

    /// Record a viewport change; the field is rebuilt once resizing settles.
    pub fn viewport_resized(&mut self, bounds: Bounds, now_ms: f64) {
        self.pending_bounds = Some(bounds);
        self.resize_debounce.arm(now_ms, RESIZE_DEBOUNCE_MS);
    }

    /// Pointer moved within the activity window.
    pub fn pointer_active(&self, now_ms: f64) -> bool {
        self.pointer.is_some() && self.pointer_activity.is_pending_at(now_ms)
    }

    /// Apply a settled resize, if any. Returns the bounds it rebuilt for.
    pub fn poll_resize(&mut self, now_ms: f64) -> Option<Bounds> {
        if !self.resize_debounce.fire_if_due(now_ms) {
            return None;
        }
        let bounds = self.pending_bounds.take()?;
        self.field.resize(bounds);
        Some(bounds)
    }

    /// Advance every subsystem by one frame and paint to `surface`.
    pub fn frame<S: DrawSurface + ?Sized>(
        &mut self,
        tick: FrameTick,
        mut surface: Option<&mut S>,
    ) -> FrameOutput {
        let now = tick.now_ms;
        let resized = self.poll_resize(now);
        if let (Some(b), Some(s)) = (resized, surface.as_deref_mut()) {
            s.resize(b.width, b.height);
        }

        self.tracker.poll(now);

        let active = self.pointer_active(now);
        self.field.step(self.pointer, active);
        self.ripples.prune(now);
        if let Some(s) = surface {
            self.field.draw(&mut *s);
            self.ripples.draw(&mut *s, now);
        }

        let scroll_to = if self.scroller.is_enabled() {
            self.scroller.tick(now)
        } else {
            None
        };

        let follower = self.follower_enabled.then(|| {
            follower_style(
                &self.config.follower,
                self.tracker.smoothed(),
                self.classifier.current(),
                self.tracker.is_clicking(),
                self.tracker.visibility(),
            )
        });

        FrameOutput {
            follower,
            scroll_to,
            resized,
        }
    }

    /// Cancel every timer; later input is ignored.
    pub fn teardown(&mut self) {
        self.tracker.teardown();
        self.pointer_activity.cancel();
        self.resize_debounce.cancel();
        self.pending_bounds = None;
        self.ripples.clear();
        self.scroller.stop();
        self.reveal.clear();
    }
}
