use crate::constants::{PHASE_COOLDOWN_MS, PIN_TOLERANCE_PX, RELEASE_DELAY_MS};

pub const ATTR_COOLDOWN_MS: &str = "data-cooldown-ms";
pub const ATTR_PIN_TOLERANCE: &str = "data-pin-tolerance";
pub const ATTR_RELEASE_DELAY_MS: &str = "data-release-delay-ms";

/// Per-page hero tuning; defaults come from `constants.rs` and the hero
/// section may override them through `data-*` attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    pub cooldown_ms: f64,
    pub pin_tolerance_px: f64,
    pub release_delay_ms: i32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: PHASE_COOLDOWN_MS,
            pin_tolerance_px: PIN_TOLERANCE_PX,
            release_delay_ms: RELEASE_DELAY_MS,
        }
    }
}

impl HeroConfig {
    /// Build from an attribute lookup. Missing attributes keep the default;
    /// malformed or negative ones are logged and ignored.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse_non_negative(&lookup, ATTR_COOLDOWN_MS) {
            cfg.cooldown_ms = v;
        }
        if let Some(v) = parse_non_negative(&lookup, ATTR_PIN_TOLERANCE) {
            cfg.pin_tolerance_px = v;
        }
        if let Some(v) = parse_non_negative(&lookup, ATTR_RELEASE_DELAY_MS) {
            cfg.release_delay_ms = v.min(i32::MAX as f64) as i32;
        }
        cfg
    }
}

fn parse_non_negative<F>(lookup: &F, name: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}
