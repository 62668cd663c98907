use crate::constants::*;
use crate::core::error::ConfigError;
use crate::core::reveal::RevealRegion;
use crate::core::surface::Rgb;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub palette: Vec<Rgb>,
    /// Upper bound of the per-particle radius, in px.
    pub base_size: f32,
    /// Velocity components are drawn from `(-speed/2, speed/2)`.
    pub speed: f32,
    /// Whether the pointer repels particles.
    pub interactive: bool,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            palette: default_palette(),
            base_size: DEFAULT_PARTICLE_SIZE,
            speed: DEFAULT_PARTICLE_SPEED,
            interactive: true,
        }
    }
}

pub fn default_palette() -> Vec<Rgb> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|hex| Rgb::from_hex(hex).ok())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct FollowerParams {
    pub color: Rgb,
    pub base_size: f32,
    pub smooth_factor: f32,
    pub throttle_ms: f64,
    pub idle_timeout_ms: f64,
    /// Skip the follower entirely on narrow or touch devices.
    pub mobile_disabled: bool,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(DEFAULT_FOLLOWER_COLOR).unwrap_or(Rgb::WHITE),
            base_size: FOLLOWER_BASE_SIZE,
            smooth_factor: DEFAULT_SMOOTH_FACTOR,
            throttle_ms: SAMPLE_THROTTLE_MS,
            idle_timeout_ms: IDLE_TIMEOUT_MS,
            mobile_disabled: true,
        }
    }
}

impl FollowerParams {
    /// Whether the follower should exist on a viewport of this width.
    pub fn should_render(&self, viewport_width: f32, touch_capable: bool) -> bool {
        let mobile = viewport_width <= MOBILE_MAX_WIDTH || touch_capable;
        !(self.mobile_disabled && mobile)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollParams {
    pub enabled: bool,
    pub duration_ms: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: SCROLL_DURATION_MS,
            wheel_multiplier: WHEEL_MULTIPLIER,
            touch_multiplier: TOUCH_MULTIPLIER,
        }
    }
}

/// Every construction-time parameter of the backdrop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackdropConfig {
    pub particles: ParticleParams,
    pub follower: FollowerParams,
    pub scroll: ScrollParams,
    /// Region used for `[data-reveal]` elements without explicit thresholds.
    pub reveal: RevealRegion,
}

impl BackdropConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particles.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.particles.count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooManyParticles {
                count: self.particles.count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        non_negative("particle size", self.particles.base_size)?;
        non_negative("particle speed", self.particles.speed)?;
        non_negative("follower size", self.follower.base_size)?;
        let k = self.follower.smooth_factor;
        if !(k > 0.0 && k <= 1.0) {
            return Err(ConfigError::SmoothFactorOutOfRange(k));
        }
        non_negative("scroll duration", self.scroll.duration_ms as f32)?;
        self.reveal.validate()
    }

    /// Apply `data-*` style overrides. `lookup` returns the raw attribute
    /// value for a key such as `particle-count`. The first bad value aborts
    /// and leaves earlier overrides applied.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("particle-count") {
            self.particles.count = parse("particle-count", &v)?;
        }
        if let Some(v) = lookup("particle-colors") {
            let palette = Rgb::parse_list(&v)?;
            if palette.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
            self.particles.palette = palette;
        }
        if let Some(v) = lookup("particle-size") {
            self.particles.base_size = parse("particle-size", &v)?;
        }
        if let Some(v) = lookup("particle-speed") {
            self.particles.speed = parse("particle-speed", &v)?;
        }
        if let Some(v) = lookup("interactive") {
            self.particles.interactive = parse_flag("interactive", &v)?;
        }
        if let Some(v) = lookup("smooth-factor") {
            self.follower.smooth_factor = parse("smooth-factor", &v)?;
        }
        if let Some(v) = lookup("follower-color") {
            self.follower.color = Rgb::from_hex(&v)?;
        }
        if let Some(v) = lookup("follower-size") {
            self.follower.base_size = parse("follower-size", &v)?;
        }
        if let Some(v) = lookup("smooth-scroll") {
            self.scroll.enabled = parse_flag("smooth-scroll", &v)?;
        }
        self.validate()
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNonFinite { name, value })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparsable {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "" | "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::Unparsable {
            key,
            value: value.to_string(),
        }),
    }
}

/// Parse four comma separated numbers, e.g. a `data-reveal-thresholds` value.
pub fn parse_quad(key: &'static str, value: &str) -> Result<[f32; 4], ConfigError> {
    let bad = || ConfigError::Unparsable {
        key,
        value: value.to_string(),
    };
    let mut out = [0.0f32; 4];
    let mut parts = value.split(',').map(str::trim);
    for slot in &mut out {
        *slot = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    }
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(out)
}
