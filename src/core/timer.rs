/// One-shot timer evaluated against the frame clock.
///
/// Replaces host `setTimeout` handles: arming twice moves the deadline,
/// cancelling clears it, and [`Deadline::fire_if_due`] reports expiry exactly
/// once. Times are milliseconds on the same clock the caller ticks with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Deadline {
    due_ms: Option<f64>,
}

impl Deadline {
    pub const fn new() -> Self {
        Self { due_ms: None }
    }

    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_ms = Some(now_ms + delay_ms.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.due_ms
    }

    /// True while armed and not yet expired at `now_ms`.
    pub fn is_pending_at(&self, now_ms: f64) -> bool {
        matches!(self.due_ms, Some(due) if now_ms < due)
    }

    /// Returns true once when `now_ms` reaches the deadline, then disarms.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
