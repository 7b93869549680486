//! Session facade for hosts
//!
//! Hosts forward input edges as they happen; they are buffered here and only
//! consumed by the next `tick()`. Renderers read the outbound getters or a
//! [`GameSnapshot`] after every tick.

use serde::{Deserialize, Serialize};

use super::level::{Level, LevelCatalog};
use super::physics::MovementIntent;
use super::state::{ActorSnapshot, GamePhase, GameState};
use super::tick::{GameEvent, JumpEdge, TickInput, tick};
use crate::tuning::Tuning;

/// Everything a renderer draws in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub lives: u8,
    pub max_lives: u8,
    pub level_index: usize,
    pub level_count: usize,
    pub camera_offset: f32,
    pub actor: ActorSnapshot,
    /// Held jump charge in [0, 1] for a charge meter
    pub charge: f32,
}

/// One play session: state, rules data and buffered input
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    tuning: Tuning,
    catalog: LevelCatalog,
    input: TickInput,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Tuning::default(), LevelCatalog::default())
    }
}

impl Game {
    pub fn new(tuning: Tuning, catalog: LevelCatalog) -> Self {
        Self {
            state: GameState::new(&tuning),
            tuning,
            catalog,
            input: TickInput::default(),
        }
    }

    // === Inbound ===

    /// Latest held movement keys
    pub fn set_movement_intent(&mut self, movement: MovementIntent) {
        self.input.movement = movement;
    }

    /// Jump button down. Ignored outside `Playing`.
    pub fn press_jump(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.input.jump_edges.push(JumpEdge::Press);
        }
    }

    /// Jump button up
    pub fn release_jump(&mut self) {
        self.input.jump_edges.push(JumpEdge::Release);
    }

    /// Run one fixed step, consuming buffered jump edges
    pub fn tick(&mut self) -> Option<GameEvent> {
        let input = TickInput {
            movement: self.input.movement,
            jump_edges: std::mem::take(&mut self.input.jump_edges),
        };
        tick(&mut self.state, &input, &self.catalog, &self.tuning)
    }

    /// Begin a fresh run from level 1 with full lives
    pub fn start_or_reset(&mut self) {
        self.state.reset(&self.tuning);
        self.input = TickInput::default();
        log::info!(
            "New run: {} levels, {} lives",
            self.catalog.len(),
            self.state.lives
        );
    }

    // === Outbound ===

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn level_index(&self) -> usize {
        self.state.level_index
    }

    pub fn camera_offset(&self) -> f32 {
        self.state.camera_offset
    }

    pub fn actor_snapshot(&self) -> ActorSnapshot {
        self.state.actor.snapshot()
    }

    pub fn current_level(&self) -> &Level {
        self.catalog.level(self.state.level_index)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let max_charge = self.tuning.max_charge();
        let charge = if max_charge > 0.0 {
            self.state.actor.jump_charge / max_charge
        } else {
            0.0
        };

        GameSnapshot {
            phase: self.state.phase,
            lives: self.state.lives,
            max_lives: self.tuning.initial_lives,
            level_index: self.state.level_index,
            level_count: self.catalog.len(),
            camera_offset: self.state.camera_offset,
            actor: self.actor_snapshot(),
            charge,
        }
    }
}
