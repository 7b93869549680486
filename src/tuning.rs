//! Data-driven game balance
//!
//! Every physics and rules constant lives in [`Tuning`] so a host can load a
//! JSON override. Missing fields fall back to the compiled-in defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Physics and rules constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Added to vertical velocity each airborne tick
    pub gravity: f32,
    /// Launch velocity with zero charge (negative is up)
    pub min_jump_force: f32,
    /// Launch velocity bound
    pub max_jump_force: f32,
    /// Horizontal speed per tick
    pub move_speed: f32,
    /// Charge gained per tick while charging
    pub charge_rate: f32,

    // === Geometry ===
    /// Y of the ground surface
    pub ground_height: f32,
    /// Side of the duck's square bounding box
    pub actor_size: f32,
    /// Respawn x
    pub start_x: f32,
    /// Sink depth into a gap before it counts as a fall
    pub gap_tolerance: f32,

    // === Rules ===
    pub initial_lives: u8,
    /// Distance from the right edge that completes a level
    pub progress_margin: f32,
    /// Camera dead zone width
    pub camera_dead_zone: f32,

    // === Timing ===
    /// Fixed tick period in milliseconds
    pub tick_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            min_jump_force: MIN_JUMP_FORCE,
            max_jump_force: MAX_JUMP_FORCE,
            move_speed: MOVE_SPEED,
            charge_rate: CHARGE_RATE,

            ground_height: GROUND_HEIGHT,
            actor_size: ACTOR_SIZE,
            start_x: START_X,
            gap_tolerance: GAP_TOLERANCE,

            initial_lives: INITIAL_LIVES,
            progress_margin: PROGRESS_MARGIN,
            camera_dead_zone: CAMERA_DEAD_ZONE,

            tick_ms: TICK_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject constants the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid =
            |msg: &str| -> Result<(), TuningError> { Err(TuningError::Invalid(msg.to_string())) };

        if self.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if self.min_jump_force >= 0.0 || self.max_jump_force >= 0.0 {
            return invalid("jump forces must be negative (upward)");
        }
        if self.move_speed < 0.0 || self.charge_rate < 0.0 {
            return invalid("move_speed and charge_rate must not be negative");
        }
        if self.actor_size <= 0.0 || self.ground_height <= self.actor_size {
            return invalid("actor must fit above the ground");
        }
        if self.initial_lives == 0 {
            return invalid("initial_lives must be at least 1");
        }
        if self.tick_ms <= 0.0 {
            return invalid("tick_ms must be positive");
        }
        if self.start_x < 0.0 || self.gap_tolerance < 0.0 {
            return invalid("start_x and gap_tolerance must not be negative");
        }
        if self.progress_margin < 0.0 || self.camera_dead_zone < 0.0 {
            return invalid("progress_margin and camera_dead_zone must not be negative");
        }
        Ok(())
    }

    /// Resting y (top edge) of a duck standing on the ground
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_height - self.actor_size
    }

    /// Upper bound on accumulated jump charge
    #[inline]
    pub fn max_charge(&self) -> f32 {
        (self.max_jump_force - self.min_jump_force).abs()
    }

    /// Vertical launch velocity for a given charge
    #[inline]
    pub fn launch_velocity(&self, charge: f32) -> f32 {
        (self.min_jump_force - charge).min(self.max_jump_force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_y(), 440.0);
        assert_eq!(tuning.max_charge(), 10.0);
    }

    #[test]
    fn test_launch_velocity_bounded_by_max_force() {
        let tuning = Tuning::default();
        assert_eq!(tuning.launch_velocity(0.0), -25.0);
        assert_eq!(tuning.launch_velocity(10.0), -25.0);
        assert!(tuning.launch_velocity(4.5) <= tuning.max_jump_force);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "initial_lives": 5 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.move_speed, MOVE_SPEED);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ gravity: "),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "initial_lives": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "gravity": -1.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "min_jump_force": 3.0 }"#),
            Err(TuningError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_negative_offsets() {
        for json in [
            r#"{ "gap_tolerance": -30.0 }"#,
            r#"{ "start_x": -500.0 }"#,
            r#"{ "progress_margin": -1.0 }"#,
            r#"{ "camera_dead_zone": -300.0 }"#,
        ] {
            assert!(
                matches!(Tuning::from_json(json), Err(TuningError::Invalid(_))),
                "accepted {}",
                json
            );
        }
        // Zero is a legal edge
        assert!(Tuning::from_json(r#"{ "start_x": 0.0, "gap_tolerance": 0.0 }"#).is_ok());
    }
}
