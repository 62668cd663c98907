use crate::constants::*;
use crate::core::error::ConfigError;
use fnv::FnvHashMap;

/// Threshold curve of one reveal region.
///
/// `thresholds` are scroll-progress breakpoints `[fade-in start, fully
/// visible, fade-out start, fully hidden]`; `opacity` and `offset` give the
/// output at each breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealRegion {
    pub thresholds: [f32; 4],
    pub opacity: [f32; 4],
    pub offset: [f32; 4],
}

impl Default for RevealRegion {
    fn default() -> Self {
        Self::fade_up()
    }
}

impl RevealRegion {
    /// Fade in while sliding up 50px, then back out.
    pub fn fade_up() -> Self {
        Self {
            thresholds: DEFAULT_REVEAL_THRESHOLDS,
            opacity: DEFAULT_REVEAL_OPACITY,
            offset: DEFAULT_REVEAL_OFFSET,
        }
    }

    pub fn fade_in() -> Self {
        Self {
            offset: [0.0; 4],
            ..Self::fade_up()
        }
    }

    pub fn with_thresholds(mut self, thresholds: [f32; 4]) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_offset(mut self, offset: [f32; 4]) -> Self {
        self.offset = offset;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.thresholds;
        let finite = t.iter().all(|v| v.is_finite());
        let ordered = t.windows(2).all(|w| w[0] <= w[1]);
        if finite && ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds(t))
        }
    }

    pub fn evaluate(&self, progress: f32) -> RevealStyle {
        RevealStyle {
            opacity: interpolate(progress, &self.thresholds, &self.opacity),
            offset: interpolate(progress, &self.thresholds, &self.offset),
        }
    }

    /// Style on the fully-visible plateau, used when nothing tracks scrolling.
    pub fn resting(&self) -> RevealStyle {
        RevealStyle {
            opacity: self.opacity[1],
            offset: self.offset[1],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Vertical translation in px.
    pub offset: f32,
}

/// Piecewise-linear map of `p` through `(thresholds[i], outputs[i])`,
/// clamped to the end values outside the threshold range. A zero-width
/// segment jumps to its right-hand value.
pub fn interpolate(p: f32, thresholds: &[f32; 4], outputs: &[f32; 4]) -> f32 {
    if p.is_nan() || p < thresholds[0] {
        return outputs[0];
    }
    if p >= thresholds[3] {
        return outputs[3];
    }
    // last breakpoint at or below p; p < t3 keeps i <= 2
    let i = thresholds[..3].iter().rposition(|t| *t <= p).unwrap_or(0);
    let (t0, t1) = (thresholds[i], thresholds[i + 1]);
    let width = t1 - t0;
    if width <= f32::EPSILON {
        return outputs[i + 1];
    }
    let f = (p - t0) / width;
    outputs[i] + (outputs[i + 1] - outputs[i]) * f
}

/// Scroll progress of an element through the viewport: 0 when its top edge
/// sits on the bottom of the viewport, 1 when its bottom edge leaves the top.
pub fn scroll_progress(rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u32);

/// Registry of mounted reveal regions.
#[derive(Debug, Default)]
pub struct ScrollRevealMapper {
    regions: FnvHashMap<RegionId, RevealRegion>,
    next_id: u32,
}

impl ScrollRevealMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region: RevealRegion) -> Result<RegionId, ConfigError> {
        region.validate()?;
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, region);
        Ok(id)
    }

    pub fn unregister(&mut self, id: RegionId) -> Option<RevealRegion> {
        self.regions.remove(&id)
    }

    pub fn get(&self, id: RegionId) -> Option<&RevealRegion> {
        self.regions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Style of one region at `progress`; `None` once it is unregistered.
    pub fn evaluate(&self, id: RegionId, progress: f32) -> Option<RevealStyle> {
        self.regions.get(&id).map(|r| r.evaluate(progress))
    }

    pub fn resting(&self, id: RegionId) -> Option<RevealStyle> {
        self.regions.get(&id).map(RevealRegion::resting)
    }
}

/// One-shot "has this block scrolled into view" latch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLatch {
    pub threshold: f32,
    pub once: bool,
    in_view: bool,
    latched: bool,
}

impl Default for ViewLatch {
    fn default() -> Self {
        Self::new(IN_VIEW_THRESHOLD, true)
    }
}

impl ViewLatch {
    pub fn new(threshold: f32, once: bool) -> Self {
        Self {
            threshold,
            once,
            in_view: false,
            latched: false,
        }
    }

    /// Re-check against the element's current top edge; returns visibility.
    pub fn update(&mut self, rect_top: f32, viewport_height: f32) -> bool {
        let visible = rect_top <= viewport_height * (1.0 - self.threshold);
        if visible {
            self.in_view = true;
            self.latched |= self.once;
        } else if !self.latched {
            self.in_view = false;
        }
        self.in_view
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }
}
