//! Browser bindings
//!
//! JavaScript owns key capture and drawing. It forwards key edges here,
//! calls `frame()` from `requestAnimationFrame`, and reads the snapshot back.

use wasm_bindgen::prelude::*;

use super::{FixedTimestep, load_game, run_ticks};
use crate::sim::{Game, GamePhase, MovementIntent};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Duck Dash (web) starting...");
}

/// Game instance handed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    timestep: FixedTimestep,
}

#[wasm_bindgen]
impl WebGame {
    /// Optional JSON strings override tuning and levels
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>, levels_json: Option<String>) -> WebGame {
        let game = load_game(tuning_json.as_deref(), levels_json.as_deref());
        let timestep = FixedTimestep::new(game.tuning().tick_ms);
        WebGame { game, timestep }
    }

    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.game.set_movement_intent(MovementIntent { left, right });
    }

    pub fn press_jump(&mut self) {
        self.game.press_jump();
    }

    pub fn release_jump(&mut self) {
        self.game.release_jump();
    }

    pub fn start_or_reset(&mut self) {
        self.timestep.reset();
        self.game.start_or_reset();
    }

    /// Advance by a frame's worth of time. Returns the number of ticks run.
    pub fn frame(&mut self, dt_ms: f32) -> u32 {
        if self.game.phase() != GamePhase::Playing {
            self.timestep.reset();
            return 0;
        }

        let steps = self.timestep.accumulate(dt_ms);
        run_ticks(&mut self.game, &mut self.timestep, steps)
    }

    pub fn phase(&self) -> String {
        self.game.phase().as_str().to_string()
    }

    pub fn lives(&self) -> u8 {
        self.game.lives()
    }

    pub fn camera_offset(&self) -> f32 {
        self.game.camera_offset()
    }

    /// Render interpolation alpha between ticks
    pub fn alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    /// Full `GameSnapshot` as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }

    /// Current level geometry as JSON
    pub fn level_json(&self) -> String {
        serde_json::to_string(self.game.current_level()).unwrap_or_default()
    }
}
