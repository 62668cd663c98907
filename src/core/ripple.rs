use crate::constants::*;
use crate::core::surface::{DrawSurface, Rgb};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub born_ms: f64,
    pub color: Rgb,
}

impl Ripple {
    /// Normalized age in [0, 1].
    pub fn progress(&self, now_ms: f64, duration_ms: f64) -> f32 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.born_ms) / duration_ms).clamp(0.0, 1.0) as f32
    }
}

/// Quadratic ease-out.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

/// Click ripples: expanding rings that fade over their lifetime.
#[derive(Debug)]
pub struct RippleSet {
    ripples: SmallVec<[Ripple; 8]>,
    duration_ms: f64,
    max_radius: f32,
    capacity: usize,
}

impl Default for RippleSet {
    fn default() -> Self {
        Self::new(RIPPLE_DURATION_MS, RIPPLE_MAX_RADIUS, RIPPLE_CAPACITY)
    }
}

impl RippleSet {
    pub fn new(duration_ms: f64, max_radius: f32, capacity: usize) -> Self {
        Self {
            ripples: SmallVec::new(),
            duration_ms,
            max_radius,
            capacity: capacity.max(1),
        }
    }

    /// Start a ripple; the oldest one is dropped when at capacity.
    pub fn spawn(&mut self, center: Vec2, color: Rgb, now_ms: f64) {
        if self.ripples.len() >= self.capacity {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple {
            center,
            born_ms: now_ms,
            color,
        });
    }

    /// Drop ripples whose lifetime has elapsed.
    pub fn prune(&mut self, now_ms: f64) {
        let duration = self.duration_ms;
        self.ripples.retain(|r| now_ms - r.born_ms < duration);
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    /// Radius and alpha of `ripple` at `now_ms`.
    pub fn appearance(&self, ripple: &Ripple, now_ms: f64) -> (f32, f32) {
        let t = ripple.progress(now_ms, self.duration_ms);
        let eased = ease_out(t);
        (eased * self.max_radius, RIPPLE_START_ALPHA * (1.0 - eased))
    }

    /// Stroke live ripples on top of whatever is already on `surface`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, now_ms: f64) {
        for r in &self.ripples {
            let (radius, alpha) = self.appearance(r, now_ms);
            if radius > 0.0 && alpha > 0.0 {
                surface.stroke_circle(r.center, radius, RIPPLE_LINE_WIDTH, r.color, alpha);
            }
        }
    }
}
