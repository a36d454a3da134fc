use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SELECTOR: &str = ".slideshow";
pub const DEFAULT_VISIBLE_CLASS: &str = "in";
pub const DEFAULT_DRAGGING_CLASS: &str = "dragging";
pub const DEFAULT_INITIAL_SCROLL_OFFSET: f64 = 1.0;

pub const DEPTH_THRESHOLD_DIVISOR: f64 = 4.0;
pub const DEPTH_SEPARATION_RATIO: f64 = 0.2;
pub const DEPTH_MIN_SEPARATED_PERSPECTIVE: f64 = 100.0;
pub const DEPTH_MAX_RETRIES: u32 = 64;

pub const MOMENTUM_INTERVAL_MS: u32 = 10;
pub const MOMENTUM_MAX_VELOCITY: f64 = 25.0;
pub const MOMENTUM_DECAY_PER_TICK: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthParams {
    pub threshold_divisor: f64,
    pub separation_ratio: f64,
    pub min_separated_perspective: f64,
    pub max_retries: u32,
}

impl Default for DepthParams {
    fn default() -> Self {
        Self {
            threshold_divisor: DEPTH_THRESHOLD_DIVISOR,
            separation_ratio: DEPTH_SEPARATION_RATIO,
            min_separated_perspective: DEPTH_MIN_SEPARATED_PERSPECTIVE,
            max_retries: DEPTH_MAX_RETRIES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumParams {
    pub interval_ms: u32,
    pub max_velocity: f64,
    pub decay_per_tick: f64,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            interval_ms: MOMENTUM_INTERVAL_MS,
            max_velocity: MOMENTUM_MAX_VELOCITY,
            decay_per_tick: MOMENTUM_DECAY_PER_TICK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub selector: String,
    pub visible_class: String,
    pub dragging_class: String,
    pub initial_scroll_offset: f64,
    pub depth: DepthParams,
    pub momentum: MomentumParams,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_string(),
            dragging_class: DEFAULT_DRAGGING_CLASS.to_string(),
            initial_scroll_offset: DEFAULT_INITIAL_SCROLL_OFFSET,
            depth: DepthParams::default(),
            momentum: MomentumParams::default(),
        }
    }
}

impl SlideshowConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    // Keys missing from `overrides` keep their current values.
    pub fn with_overrides(&self, overrides: &str) -> Result<Self, ConfigError> {
        let patch: Value =
            serde_json::from_str(overrides).map_err(|err| ConfigError::Parse(err.to_string()))?;
        if !patch.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let mut base =
            serde_json::to_value(self).map_err(|err| ConfigError::Parse(err.to_string()))?;
        merge_value(&mut base, patch);
        let config: Self =
            serde_json::from_value(base).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        check_positive("momentum.interval_ms", self.momentum.interval_ms as f64)?;
        check_positive("momentum.max_velocity", self.momentum.max_velocity)?;
        check_positive("momentum.decay_per_tick", self.momentum.decay_per_tick)?;
        check_positive("depth.threshold_divisor", self.depth.threshold_divisor)?;
        if !self.depth.separation_ratio.is_finite() || self.depth.separation_ratio < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "depth.separation_ratio",
                value: self.depth.separation_ratio,
            });
        }
        if !self.initial_scroll_offset.is_finite() || self.initial_scroll_offset < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "initial_scroll_offset",
                value: self.initial_scroll_offset,
            });
        }
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn merge_value(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NotAnObject,
    EmptySelector,
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid slideshow config: {message}"),
            ConfigError::NotAnObject => write!(f, "slideshow config overrides must be an object"),
            ConfigError::EmptySelector => write!(f, "slideshow selector must not be empty"),
            ConfigError::OutOfRange { field, value } => {
                write!(f, "slideshow config {field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
