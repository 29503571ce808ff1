//! Swipe navigator tuning
//!
//! Every threshold and animation constant the navigator uses lives here so it
//! can be loaded from a JSON file and exercised in tests without rendering.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NavigatorError, Result};

/// Complete navigator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Gesture recognition thresholds
    pub gesture: GestureConfig,

    /// Page transition spring
    pub spring: SpringConfig,

    /// Haptic pulse lengths
    pub haptics: HapticConfig,

    /// Page shown on mount when none is requested
    pub default_initial_page: usize,
}

/// Thresholds used to turn a drag into a page change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum drag distance in points
    pub distance_threshold: f32,

    /// Minimum release speed in points per second
    pub velocity_threshold: f32,

    /// Fraction of the container width that always changes page
    pub width_ratio_threshold: f32,

    /// Resistance applied past the first and last page (0 = hard stop, 1 = free)
    pub drag_elastic: f32,

    /// Pointer travel before a gesture is locked to an axis
    pub axis_lock_slop: f32,
}

/// Damped spring used for page transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,

    /// 1.0 is critically damped
    pub damping_ratio: f32,

    pub mass: f32,

    /// Distance from target considered at rest
    pub rest_delta: f32,

    /// Speed below which the spring may settle
    pub rest_speed: f32,

    /// Hard cap on a single transition
    pub max_duration_secs: f32,
}

/// Haptic pulse durations in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticConfig {
    pub enabled: bool,
    pub drag_start_ms: u32,
    pub page_change_ms: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            spring: SpringConfig::default(),
            haptics: HapticConfig::default(),
            default_initial_page: 1,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 50.0,
            velocity_threshold: 500.0,
            width_ratio_threshold: 0.3,
            drag_elastic: 0.2,
            axis_lock_slop: 8.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping_ratio: 1.0,
            mass: 1.0,
            rest_delta: 0.5,
            rest_speed: 10.0,
            max_duration_secs: 1.0,
        }
    }
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            drag_start_ms: 5,
            page_change_ms: 10,
        }
    }
}

impl SpringConfig {
    /// Damping coefficient derived from the damping ratio
    pub fn damping(&self) -> f32 {
        self.damping_ratio * 2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl SwipeConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SwipeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!("Loaded swipe config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the navigator cannot work with
    pub fn validate(&self) -> Result<()> {
        let g = &self.gesture;
        let s = &self.spring;

        let checks: [(bool, &str); 10] = [
            (g.distance_threshold >= 0.0, "gesture.distance_threshold must be >= 0"),
            (g.velocity_threshold >= 0.0, "gesture.velocity_threshold must be >= 0"),
            (
                g.width_ratio_threshold > 0.0 && g.width_ratio_threshold <= 1.0,
                "gesture.width_ratio_threshold must be in (0, 1]",
            ),
            ((0.0..=1.0).contains(&g.drag_elastic), "gesture.drag_elastic must be in [0, 1]"),
            (g.axis_lock_slop >= 0.0, "gesture.axis_lock_slop must be >= 0"),
            (s.stiffness > 0.0, "spring.stiffness must be > 0"),
            (s.damping_ratio > 0.0, "spring.damping_ratio must be > 0"),
            (s.mass > 0.0, "spring.mass must be > 0"),
            (s.rest_delta > 0.0 && s.rest_speed > 0.0, "spring rest thresholds must be > 0"),
            (s.max_duration_secs > 0.0, "spring.max_duration_secs must be > 0"),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(NavigatorError::InvalidConfig(msg.to_string())),
            None => Ok(()),
        }
    }
}
