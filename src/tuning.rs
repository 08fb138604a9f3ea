//! Data-driven game balance
//!
//! Every physics and scoring value the simulation reads comes from here, so
//! feel can be adjusted without touching the tick code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which platforms turn a walking enemy around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BounceRule {
    /// Every platform whose horizontal extent the enemy leaves flips its
    /// direction, once per platform. Unrelated platforms count too.
    #[default]
    AnyPlatform,
    /// Only platforms the enemy is standing on
    SupportingPlatform,
}

/// Physics and scoring values, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub max_fall_speed: f32,
    /// Multiplier applied to horizontal velocity each tick with no input
    pub horizontal_damping: f32,
    pub landing_band: f32,
    pub stomp_margin: f32,
    pub stomp_bounce_velocity: f32,
    pub fall_limit_y: f32,
    pub camera_half_width: f32,
    pub coin_points: u32,
    pub stomp_points: u32,
    pub starting_lives: u32,
    pub enemy_bounce: BounceRule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            horizontal_damping: HORIZONTAL_DAMPING,
            landing_band: LANDING_BAND,
            stomp_margin: STOMP_MARGIN,
            stomp_bounce_velocity: STOMP_BOUNCE_VELOCITY,
            fall_limit_y: FALL_LIMIT_Y,
            camera_half_width: CAMERA_HALF_WIDTH,
            coin_points: COIN_POINTS,
            stomp_points: STOMP_POINTS,
            starting_lives: STARTING_LIVES,
            enemy_bounce: BounceRule::AnyPlatform,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides. Fields left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("move_speed", self.move_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("horizontal_damping", self.horizontal_damping),
            ("landing_band", self.landing_band),
            ("stomp_margin", self.stomp_margin),
            ("stomp_bounce_velocity", self.stomp_bounce_velocity),
            ("fall_limit_y", self.fall_limit_y),
            ("camera_half_width", self.camera_half_width),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::InvalidTuning(format!("{name} must be finite")));
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::InvalidTuning("gravity must be positive".into()));
        }
        if self.max_fall_speed <= 0.0 {
            return Err(ConfigError::InvalidTuning(
                "max_fall_speed must be positive".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.horizontal_damping) {
            return Err(ConfigError::InvalidTuning(
                "horizontal_damping must be in [0, 1)".into(),
            ));
        }
        if self.landing_band <= 0.0 {
            return Err(ConfigError::InvalidTuning(
                "landing_band must be positive".into(),
            ));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::InvalidTuning(
                "starting_lives must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// LocalStorage key for developer overrides
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flag_dash_tuning";

    /// Load overrides from LocalStorage (WASM only).
    ///
    /// A stored value that doesn't parse is ignored with a warning; one that
    /// parses but fails validation is returned as an error.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Tuning>(&json) {
                    Ok(tuning) => {
                        tuning.validate()?;
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return Ok(tuning);
                    }
                    Err(e) => log::warn!("Ignoring stored tuning ({e}), using defaults"),
                }
            }
        }

        Ok(Self::default())
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }
}
