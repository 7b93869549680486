//! Game state and core simulation types
//!
//! The duck and the session counters form one aggregate that the tick
//! pipeline mutates as a unit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated yet
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Out of lives
    Dead,
    /// Finished the last level
    Win,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::Dead => "dead",
            GamePhase::Win => "win",
        }
    }
}

/// The player-controlled duck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner of the bounding box (y grows downward)
    pub pos: Vec2,
    /// Per-tick velocity
    pub vel: Vec2,
    /// Airborne (jumping or falling)
    pub is_jumping: bool,
    /// Charge accumulated toward the next jump
    pub jump_charge: f32,
    /// Jump button held on the ground
    pub is_charging: bool,
}

impl Actor {
    /// A duck standing still at the level origin
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.start_x, tuning.ground_y()),
            vel: Vec2::ZERO,
            is_jumping: false,
            jump_charge: 0.0,
            is_charging: false,
        }
    }

    /// +1 facing right (including idle), -1 facing left
    #[inline]
    pub fn facing(&self) -> i8 {
        if self.vel.x >= 0.0 { 1 } else { -1 }
    }

    pub fn snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            x: self.pos.x,
            y: self.pos.y,
            facing: self.facing(),
        }
    }
}

/// What a renderer needs to draw the duck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub x: f32,
    pub y: f32,
    pub facing: i8,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining lives, never above the tuning's initial count
    pub lives: u8,
    /// Index into the level catalog (0-based)
    pub level_index: usize,
    /// Horizontal scroll, never negative
    pub camera_offset: f32,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session waiting on the title screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            lives: tuning.initial_lives,
            level_index: 0,
            camera_offset: 0.0,
            phase: GamePhase::Start,
            actor: Actor::spawn(tuning),
            time_ticks: 0,
        }
    }

    /// Re-initialize everything and begin playing level 0
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self {
            phase: GamePhase::Playing,
            ..Self::new(tuning)
        };
    }

    /// Put the duck back at the level origin and recentre the camera
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.actor = Actor::spawn(tuning);
        self.camera_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_start() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.lives, 3);
        assert_eq!(state.actor.pos, Vec2::new(50.0, 440.0));
    }

    #[test]
    fn test_reset_restores_everything() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.lives = 0;
        state.level_index = 2;
        state.camera_offset = 120.0;
        state.phase = GamePhase::Dead;
        state.actor.pos.x = 900.0;
        state.actor.is_charging = true;

        state.reset(&tuning);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.camera_offset, 0.0);
        assert_eq!(state.actor, Actor::spawn(&tuning));
    }

    #[test]
    fn test_facing_follows_velocity_sign() {
        let tuning = Tuning::default();
        let mut actor = Actor::spawn(&tuning);
        assert_eq!(actor.facing(), 1);
        actor.vel.x = -5.0;
        assert_eq!(actor.snapshot().facing, -1);
        actor.vel.x = 5.0;
        assert_eq!(actor.snapshot().facing, 1);
    }
}
