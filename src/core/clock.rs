use crate::constants::MAX_FRAME_DT_MS;

/// Timing handed to the frame handler on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub now_ms: f64,
    /// Time since the previous tick, clamped to [0, max_dt]. Zero on the
    /// first tick after `start`.
    pub dt_ms: f64,
    pub frame: u64,
}

/// Receives one call per display refresh while the clock runs.
pub trait FrameHandler {
    fn frame(&mut self, tick: FrameTick);
}

/// Host-independent render loop state.
///
/// The host owns the actual scheduling (requestAnimationFrame on the web) and
/// calls [`FrameClock::tick`] from its callback; tests call it directly. A
/// stopped clock ignores ticks, so a late callback after `stop` is harmless.
#[derive(Debug)]
pub struct FrameClock {
    running: bool,
    last_ms: Option<f64>,
    frame: u64,
    max_dt_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT_MS)
    }

    pub fn with_max_dt(max_dt_ms: f64) -> Self {
        Self {
            running: false,
            last_ms: None,
            frame: 0,
            max_dt_ms: max_dt_ms.max(0.0),
        }
    }

    /// Returns false if the clock was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_ms = None;
        true
    }

    /// Returns false if the clock was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.last_ms = None;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let dt_ms = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, self.max_dt_ms),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let tick = FrameTick {
            now_ms,
            dt_ms,
            frame: self.frame,
        };
        self.frame += 1;
        Some(tick)
    }

    /// Tick and forward to `handler`; returns whether a frame was produced.
    pub fn drive<H: FrameHandler + ?Sized>(&mut self, now_ms: f64, handler: &mut H) -> bool {
        match self.tick(now_ms) {
            Some(tick) => {
                handler.frame(tick);
                true
            }
            None => false,
        }
    }
}
