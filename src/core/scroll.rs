use crate::constants::BACK_TO_TOP_OFFSET;
use crate::core::config::ScrollParams;

/// Exponential ease-out used for smooth scrolling.
#[inline]
pub fn scroll_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Whether the back-to-top affordance should be visible at `scroll_y`.
#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Eases the page scroll position toward a target fed by wheel/touch input.
#[derive(Debug)]
pub struct SmoothScroller {
    params: ScrollParams,
    position: f64,
    from: f64,
    target: f64,
    limit: f64,
    started_ms: Option<f64>,
}

impl SmoothScroller {
    pub fn new(params: ScrollParams) -> Self {
        Self {
            params,
            position: 0.0,
            from: 0.0,
            target: 0.0,
            limit: 0.0,
            started_ms: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.params.enabled
    }

    /// Hand scrolling back to the browser; stops any animation in flight.
    pub fn disable(&mut self) {
        self.stop();
        self.params.enabled = false;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Maximum scroll offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.position = self.position.clamp(0.0, self.limit);
    }

    /// Adopt a scroll position set by something else (scrollbar, keys).
    /// Ignored mid-animation, where the position is ours.
    pub fn sync(&mut self, scroll_y: f64) {
        if self.is_animating() {
            return;
        }
        self.position = scroll_y.max(0.0);
        self.target = self.position;
    }

    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) {
        let target = self.target + delta_y * self.params.wheel_multiplier;
        self.scroll_to(target, now_ms);
    }

    /// `delta_y` is the finger movement since the last touch event; dragging
    /// up scrolls down.
    pub fn on_touch(&mut self, delta_y: f64, now_ms: f64) {
        let target = self.target - delta_y * self.params.touch_multiplier;
        self.scroll_to(target, now_ms);
    }

    pub fn scroll_to(&mut self, target: f64, now_ms: f64) {
        self.target = target.clamp(0.0, self.limit);
        self.from = self.position;
        self.started_ms = Some(now_ms);
    }

    /// Advance the animation; returns the new position while animating.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let started = self.started_ms?;
        let t = if self.params.duration_ms > 0.0 {
            ((now_ms - started) / self.params.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = scroll_ease(t);
        self.position = self.from + (self.target - self.from) * eased;
        if t >= 1.0 || (self.target - self.position).abs() < 0.5 {
            self.position = self.target;
            self.started_ms = None;
        }
        Some(self.position)
    }

    pub fn stop(&mut self) {
        self.target = self.position;
        self.started_ms = None;
    }
}
