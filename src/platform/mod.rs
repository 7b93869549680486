//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame time to fixed ticks (`FixedTimestep`)
//! - Loading tuning and level overrides
//! - Browser bindings (`web`, wasm32 only)
//! - Demo autopilot for headless runs

pub mod autopilot;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use autopilot::Autopilot;

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{Game, GamePhase, LevelCatalog};
use crate::tuning::Tuning;

/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Tick period in milliseconds
    step_ms: f32,
    /// Unsimulated time carried between frames
    accumulator: f32,
    /// Cap on ticks per frame (spiral of death guard)
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(step_ms: f32) -> Self {
        Self {
            step_ms,
            accumulator: 0.0,
            max_steps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time. Returns the number of ticks to run now.
    pub fn accumulate(&mut self, frame_ms: f32) -> u32 {
        self.accumulator += frame_ms.max(0.0);
        // Drop backlog beyond the per-frame cap
        self.accumulator = self.accumulator.min(self.step_ms * self.max_steps as f32);
        let steps = (self.accumulator / self.step_ms) as u32;
        self.accumulator -= steps as f32 * self.step_ms;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step_ms
    }

    /// Forget carried time (timer stopped)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn step_ms(&self) -> f32 {
        self.step_ms
    }
}

/// Run up to `steps` ticks, stopping early once the game leaves `Playing`.
/// Returns the number of ticks actually run.
pub fn run_ticks(game: &mut Game, timestep: &mut FixedTimestep, steps: u32) -> u32 {
    let mut ran = 0;
    while ran < steps && game.phase() == GamePhase::Playing {
        game.tick();
        ran += 1;
    }
    if game.phase() != GamePhase::Playing {
        timestep.reset();
    }
    ran
}

/// Build a game from optional JSON overrides.
///
/// A rejected override is logged and replaced by the built-in default so a
/// bad file never keeps the game from starting.
pub fn load_game(tuning_json: Option<&str>, levels_json: Option<&str>) -> Game {
    let tuning = match tuning_json.map(Tuning::from_json) {
        Some(Ok(tuning)) => {
            log::info!("Loaded tuning override");
            tuning
        }
        Some(Err(e)) => {
            log::warn!("Ignoring tuning override: {}", e);
            Tuning::default()
        }
        None => Tuning::default(),
    };

    let catalog = match levels_json.map(|json| LevelCatalog::from_json(json, &tuning)) {
        Some(Ok(catalog)) => {
            log::info!("Loaded {} custom levels", catalog.len());
            catalog
        }
        Some(Err(e)) => {
            log::warn!("Ignoring level override: {}", e);
            LevelCatalog::default()
        }
        None => LevelCatalog::default(),
    };

    Game::new(tuning, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_exact() {
        let mut ts = FixedTimestep::new(16.0);
        assert_eq!(ts.accumulate(16.0), 1);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(16.0);
        assert_eq!(ts.accumulate(8.0), 0);
        assert_eq!(ts.accumulate(10.0), 1);
        let a = ts.alpha();
        assert!(a > 0.0 && a < 1.0, "alpha was {}", a);
    }

    #[test]
    fn test_caps_steps_per_frame() {
        let mut ts = FixedTimestep::new(16.0).with_max_steps(4);
        assert_eq!(ts.accumulate(1000.0), 4);
        // Backlog was dropped
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn test_reset_drops_carry() {
        let mut ts = FixedTimestep::new(16.0);
        ts.accumulate(12.0);
        ts.reset();
        assert_eq!(ts.accumulate(8.0), 0);
    }

    #[test]
    fn test_run_ticks_stops_when_play_ends() {
        // One open level: walking right wins well before 200 ticks
        let mut game = load_game(None, Some(r#"[{ "ground_width": 400, "obstacles": [] }]"#));
        game.start_or_reset();
        game.set_movement_intent(crate::sim::MovementIntent { left: false, right: true });
        let mut ts = FixedTimestep::new(16.0).with_max_steps(200);
        ts.accumulate(12.0);

        let ran = run_ticks(&mut game, &mut ts, 200);
        assert_eq!(game.phase(), GamePhase::Win);
        assert!(ran > 0 && ran < 200, "ran {} ticks", ran);
        assert_eq!(ts.alpha(), 0.0);

        // Nothing runs outside Playing
        assert_eq!(run_ticks(&mut game, &mut ts, 5), 0);
    }

    #[test]
    fn test_run_ticks_runs_all_while_playing() {
        let mut game = Game::default();
        game.start_or_reset();
        let mut ts = FixedTimestep::new(16.0);
        assert_eq!(run_ticks(&mut game, &mut ts, 4), 4);
        assert_eq!(game.state().time_ticks, 4);
    }

    #[test]
    fn test_load_game_falls_back_on_bad_overrides() {
        let game = load_game(Some("not json"), Some("[]"));
        assert_eq!(game.tuning(), &Tuning::default());
        assert_eq!(game.catalog().len(), 3);
    }

    #[test]
    fn test_load_game_applies_overrides() {
        let game = load_game(
            Some(r#"{ "initial_lives": 5 }"#),
            Some(r#"[{ "ground_width": 800, "obstacles": [] }]"#),
        );
        assert_eq!(game.tuning().initial_lives, 5);
        assert_eq!(game.catalog().len(), 1);
    }
}
