//! Data-driven game balance
//!
//! Defaults mirror the shipped constants; a JSON blob can override any
//! subset of fields for playtesting without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay values carried by the [`World`](crate::sim::World)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Bounce velocity (negative = up)
    pub jump_impulse: f32,
    /// Keyboard steering speed
    pub key_steer_speed: f32,
    /// Touch-drag steering speed
    pub touch_steer_speed: f32,
    /// Exclusive upper bound of the per-tick score roll
    pub score_roll_max: i64,
    /// Platform size
    pub platform_width: f32,
    pub platform_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            key_steer_speed: KEY_STEER_SPEED,
            touch_steer_speed: TOUCH_STEER_SPEED,
            score_roll_max: SCORE_ROLL_MAX,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse a tuning override blob. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an optional override, falling back to defaults on error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                log::warn!("Ignoring bad tuning override: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
