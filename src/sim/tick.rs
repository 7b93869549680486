//! Fixed timestep simulation tick
//!
//! Each tick runs a strict pipeline: buffered input edges, charge and
//! kinematics, hazard check, rules, camera.

use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::collision::check_collision;
use super::level::LevelCatalog;
use super::physics::{MovementIntent, accumulate_charge, begin_charge, integrate, release_jump};
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Jump button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEdge {
    Press,
    Release,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MovementIntent,
    /// Jump edges since the previous tick, oldest first
    pub jump_edges: Vec<JumpEdge>,
}

/// Rule consequences a tick can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hit a hazard, respawned at the level origin
    LifeLost { lives: u8 },
    /// Hit a hazard with the last life
    GameOver,
    /// Reached the end of a level, now on `level`
    LevelAdvanced { level: usize },
    /// Reached the end of the last level
    Won,
}

/// Advance the game state by one fixed timestep
///
/// Does nothing unless the phase is `Playing`.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    catalog: &LevelCatalog,
    tuning: &Tuning,
) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    state.time_ticks += 1;

    for edge in &input.jump_edges {
        match edge {
            JumpEdge::Press => {
                begin_charge(&mut state.actor);
            }
            JumpEdge::Release => {
                release_jump(&mut state.actor, tuning);
            }
        }
    }
    accumulate_charge(&mut state.actor, tuning);

    let level = catalog.level(state.level_index);
    integrate(&mut state.actor, input.movement, level, tuning);

    // A hazard hit repositions the duck, so progress is only checked without one
    let event = if check_collision(&state.actor, level, tuning) {
        Some(lose_life(state, tuning))
    } else {
        check_progress(state, catalog, tuning)
    };

    if state.phase == GamePhase::Playing {
        state.camera_offset = camera_offset(state.actor.pos.x, tuning.camera_dead_zone);
    }

    event
}

/// Take one life; respawn or end the run
fn lose_life(state: &mut GameState, tuning: &Tuning) -> GameEvent {
    state.lives = state.lives.saturating_sub(1);

    if state.lives == 0 {
        log::info!(
            "Game over on level {} at x={:.1}",
            state.level_index + 1,
            state.actor.pos.x
        );
        state.phase = GamePhase::Dead;
        return GameEvent::GameOver;
    }

    log::debug!(
        "Life lost at ({:.1}, {:.1}), {} left",
        state.actor.pos.x,
        state.actor.pos.y,
        state.lives
    );
    state.respawn(tuning);
    GameEvent::LifeLost { lives: state.lives }
}

/// Advance to the next level (or win) once the duck nears the right edge
fn check_progress(
    state: &mut GameState,
    catalog: &LevelCatalog,
    tuning: &Tuning,
) -> Option<GameEvent> {
    let level = catalog.level(state.level_index);
    if state.actor.pos.x <= level.ground_width - tuning.progress_margin {
        return None;
    }

    if catalog.is_last(state.level_index) {
        log::info!("Finished all {} levels", catalog.len());
        state.phase = GamePhase::Win;
        return Some(GameEvent::Won);
    }

    state.level_index += 1;
    state.respawn(tuning);
    log::info!("Level {} reached", state.level_index + 1);
    Some(GameEvent::LevelAdvanced {
        level: state.level_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Level, Obstacle};
    use glam::Vec2;

    const RIGHT: MovementIntent = MovementIntent {
        left: false,
        right: true,
    };

    fn playing(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        state.reset(tuning);
        state
    }

    fn walk_right() -> TickInput {
        TickInput {
            movement: RIGHT,
            ..Default::default()
        }
    }

    fn single_block_catalog(tuning: &Tuning) -> LevelCatalog {
        LevelCatalog::new(
            vec![Level::new(
                vec![Obstacle::Block { x: 200.0, width: 40.0, height: 40.0 }],
                1200.0,
            )],
            tuning,
        )
        .unwrap()
    }

    fn open_catalog(tuning: &Tuning, widths: &[f32]) -> LevelCatalog {
        let levels = widths.iter().map(|&w| Level::new(vec![], w)).collect();
        LevelCatalog::new(levels, tuning).unwrap()
    }

    #[test]
    fn test_walking_into_block_costs_a_life() {
        let tuning = Tuning::default();
        let catalog = single_block_catalog(&tuning);
        let mut state = playing(&tuning);

        let mut event = None;
        for _ in 0..100 {
            event = tick(&mut state, &walk_right(), &catalog, &tuning);
            if event.is_some() {
                break;
            }
        }

        assert_eq!(event, Some(GameEvent::LifeLost { lives: 2 }));
        assert_eq!(state.lives, 2);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor.pos, Vec2::new(50.0, tuning.ground_y()));
        assert_eq!(state.actor.vel, Vec2::ZERO);
        assert_eq!(state.camera_offset, 0.0);
    }

    #[test]
    fn test_last_life_ends_the_run() {
        let tuning = Tuning::default();
        let catalog = single_block_catalog(&tuning);
        let mut state = playing(&tuning);

        let mut events = Vec::new();
        for _ in 0..500 {
            if let Some(e) = tick(&mut state, &walk_right(), &catalog, &tuning) {
                events.push(e);
            }
        }

        assert_eq!(
            events,
            vec![
                GameEvent::LifeLost { lives: 2 },
                GameEvent::LifeLost { lives: 1 },
                GameEvent::GameOver,
            ]
        );
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Dead);

        let frozen = state.clone();
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &walk_right(), &catalog, &tuning), None);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_progress_advances_level() {
        let tuning = Tuning::default();
        let catalog = open_catalog(&tuning, &[400.0, 600.0]);
        let mut state = playing(&tuning);

        let mut event = None;
        for _ in 0..200 {
            event = tick(&mut state, &walk_right(), &catalog, &tuning);
            if event.is_some() {
                break;
            }
        }

        assert_eq!(event, Some(GameEvent::LevelAdvanced { level: 1 }));
        assert_eq!(state.level_index, 1);
        assert_eq!(state.lives, tuning.initial_lives);
        assert_eq!(state.actor.pos, Vec2::new(50.0, tuning.ground_y()));
        assert_eq!(state.camera_offset, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_progress_on_last_level_wins() {
        let tuning = Tuning::default();
        let catalog = open_catalog(&tuning, &[400.0]);
        let mut state = playing(&tuning);

        for _ in 0..200 {
            tick(&mut state, &walk_right(), &catalog, &tuning);
        }
        assert_eq!(state.phase, GamePhase::Win);
        assert!(state.actor.pos.x > 300.0);
    }

    #[test]
    fn test_collision_skips_progress_check() {
        let tuning = Tuning::default();
        // Hazard sits inside the progress zone
        let catalog = LevelCatalog::new(
            vec![
                Level::new(
                    vec![Obstacle::Block { x: 330.0, width: 40.0, height: 40.0 }],
                    400.0,
                ),
                Level::new(vec![], 400.0),
            ],
            &tuning,
        )
        .unwrap();
        let mut state = playing(&tuning);
        state.actor.pos.x = 296.0;

        let event = tick(&mut state, &walk_right(), &catalog, &tuning);
        assert_eq!(event, Some(GameEvent::LifeLost { lives: 2 }));
        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_tick_outside_playing_is_noop() {
        let tuning = Tuning::default();
        let catalog = LevelCatalog::default();

        for phase in [GamePhase::Start, GamePhase::Dead, GamePhase::Win] {
            let mut state = GameState::new(&tuning);
            state.phase = phase;
            let before = state.clone();
            let input = TickInput {
                movement: RIGHT,
                jump_edges: vec![JumpEdge::Press, JumpEdge::Release],
            };
            assert_eq!(tick(&mut state, &input, &catalog, &tuning), None);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_jump_edges_in_one_tick() {
        let tuning = Tuning::default();
        let catalog = open_catalog(&tuning, &[2000.0]);
        let mut state = playing(&tuning);

        let press = TickInput {
            jump_edges: vec![JumpEdge::Press],
            ..Default::default()
        };
        tick(&mut state, &press, &catalog, &tuning);
        assert!(state.actor.is_charging);
        assert_eq!(state.actor.jump_charge, tuning.charge_rate);

        let release = TickInput {
            jump_edges: vec![JumpEdge::Release],
            ..Default::default()
        };
        tick(&mut state, &release, &catalog, &tuning);
        assert!(state.actor.is_jumping);
        assert!(!state.actor.is_charging);
        assert!(state.actor.pos.y < tuning.ground_y());
    }

    #[test]
    fn test_jump_clears_block() {
        let tuning = Tuning::default();
        let catalog = single_block_catalog(&tuning);
        let mut state = playing(&tuning);

        // Launch from x=100 and keep walking right over the block
        state.actor.pos.x = 100.0;
        let jump = TickInput {
            movement: RIGHT,
            jump_edges: vec![JumpEdge::Press, JumpEdge::Release],
        };
        tick(&mut state, &jump, &catalog, &tuning);
        for _ in 0..80 {
            assert_eq!(tick(&mut state, &walk_right(), &catalog, &tuning), None);
        }
        assert!(state.actor.pos.x > 240.0);
        assert_eq!(state.lives, tuning.initial_lives);
    }

    #[test]
    fn test_falling_into_gap_costs_a_life() {
        let tuning = Tuning::default();
        let catalog = LevelCatalog::new(
            vec![Level::new(vec![Obstacle::Gap { x: 600.0, width: 100.0 }], 1840.0)],
            &tuning,
        )
        .unwrap();
        let mut state = playing(&tuning);

        let mut event = None;
        for _ in 0..300 {
            event = tick(&mut state, &walk_right(), &catalog, &tuning);
            if event.is_some() {
                break;
            }
        }
        assert_eq!(event, Some(GameEvent::LifeLost { lives: 2 }));
        assert_eq!(state.actor.pos.x, 50.0);
    }

    #[test]
    fn test_camera_follows_past_dead_zone() {
        let tuning = Tuning::default();
        let catalog = open_catalog(&tuning, &[2000.0]);
        let mut state = playing(&tuning);

        for _ in 0..100 {
            tick(&mut state, &walk_right(), &catalog, &tuning);
        }
        // 50 + 100 * 5
        assert_eq!(state.actor.pos.x, 550.0);
        assert_eq!(state.camera_offset, 250.0);
    }
}
