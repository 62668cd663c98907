use crate::core::config::FollowerParams;
use crate::core::timer::Deadline;
use glam::Vec2;

/// Raw pointer position as delivered by an input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Exponentially smoothed pointer with an idle/visibility state machine.
///
/// Visibility starts `Visible`. A sample that moves the pointer shows the
/// follower and re-arms the idle timer; when the timer expires without any
/// movement the follower is hidden. Samples at an unchanged position still
/// feed the smoothing filter but neither re-arm the timer nor reveal a
/// hidden follower. Focus, pointer-enter and pointer-down force `Visible`.
#[derive(Debug)]
pub struct PointerTracker {
    smooth_factor: f32,
    throttle_ms: f64,
    idle_timeout_ms: f64,
    smoothed: Vec2,
    last_accepted_ms: Option<f64>,
    last_raw: Option<Vec2>,
    /// Raw position recorded when the idle timer was armed.
    armed_at: Option<Vec2>,
    idle: Deadline,
    visibility: Visibility,
    clicking: bool,
    samples_seen: u64,
    samples_accepted: u64,
    torn_down: bool,
}

impl PointerTracker {
    pub fn new(params: &FollowerParams) -> Self {
        Self::with_timing(
            params.smooth_factor,
            params.throttle_ms,
            params.idle_timeout_ms,
        )
    }

    pub fn with_timing(smooth_factor: f32, throttle_ms: f64, idle_timeout_ms: f64) -> Self {
        Self {
            smooth_factor: smooth_factor.clamp(f32::EPSILON, 1.0),
            throttle_ms,
            idle_timeout_ms,
            smoothed: Vec2::ZERO,
            last_accepted_ms: None,
            last_raw: None,
            armed_at: None,
            idle: Deadline::new(),
            visibility: Visibility::Visible,
            clicking: false,
            samples_seen: 0,
            samples_accepted: 0,
            torn_down: false,
        }
    }

    /// Feed a raw pointer-move. Returns whether the sample was accepted
    /// (i.e. not dropped by the throttle).
    pub fn sample(&mut self, raw_x: f32, raw_y: f32, now_ms: f64) -> bool {
        self.samples_seen += 1;
        if self.torn_down {
            return false;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.throttle_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        self.samples_accepted += 1;

        let raw = Vec2::new(raw_x, raw_y);
        self.smoothed += (raw - self.smoothed) * self.smooth_factor;

        let moved = self.last_raw != Some(raw);
        self.last_raw = Some(raw);
        if moved {
            self.set_visibility(Visibility::Visible);
            self.idle.cancel();
            self.idle.arm(now_ms, self.idle_timeout_ms);
            self.armed_at = Some(raw);
        }
        true
    }

    pub fn ingest(&mut self, sample: PointerSample) -> bool {
        self.sample(sample.x, sample.y, sample.timestamp_ms)
    }

    /// Evaluate the idle timer. Call once per frame.
    pub fn poll(&mut self, now_ms: f64) {
        if !self.idle.fire_if_due(now_ms) {
            return;
        }
        if self.armed_at.is_some() && self.armed_at == self.last_raw {
            self.set_visibility(Visibility::Hidden);
        }
    }

    /// Window focus, pointer entering the viewport and similar events.
    pub fn force_visible(&mut self) {
        if !self.torn_down {
            self.set_visibility(Visibility::Visible);
        }
    }

    pub fn pointer_down(&mut self) {
        self.clicking = true;
        self.force_visible();
    }

    pub fn pointer_up(&mut self) {
        self.clicking = false;
    }

    /// Cancel pending timers and ignore further input.
    pub fn teardown(&mut self) {
        self.idle.cancel();
        self.armed_at = None;
        self.clicking = false;
        self.torn_down = true;
    }

    fn set_visibility(&mut self, next: Visibility) {
        if self.visibility != next {
            log::debug!("[pointer] visibility {:?} -> {:?}", self.visibility, next);
            self.visibility = next;
        }
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Most recent accepted raw position, if any.
    pub fn raw(&self) -> Option<Vec2> {
        self.last_raw
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_clicking(&self) -> bool {
        self.clicking
    }

    pub fn idle_timer_armed(&self) -> bool {
        self.idle.is_armed()
    }

    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    pub fn samples_accepted(&self) -> u64 {
        self.samples_accepted
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
