//! Demo autopilot for headless runs
//!
//! Plays by simulating candidate jumps on a cloned [`Game`]. A jump plan holds
//! right for a number of ticks and then drifts straight down. The plan that
//! lands farthest without losing a life wins. With no usable plan it walks
//! right, or backs off for a run-up when walking would hit something.

use crate::sim::{Game, GameEvent, MovementIntent};

/// How far ahead a hazard must be before jumps are considered
const LOOKAHEAD: f32 = 120.0;
/// Ticks of right input tried for each jump
const PLANS: [u32; 4] = [64, 48, 32, 16];
/// Ticks spent backing off when boxed in
const RETREAT_TICKS: u32 = 12;
/// Upper bound on a simulated jump
const MAX_SIM_TICKS: u32 = 400;

const RIGHT: MovementIntent = MovementIntent {
    left: false,
    right: true,
};
const LEFT: MovementIntent = MovementIntent {
    left: true,
    right: false,
};
const IDLE: MovementIntent = MovementIntent {
    left: false,
    right: false,
};

/// What the autopilot wants for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub movement: MovementIntent,
    /// Press and release the jump button before the tick
    pub jump: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Remaining airborne ticks to hold right
    air_right: u32,
    /// Remaining ticks to back off
    retreat: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide and apply input for the next tick
    pub fn drive(&mut self, game: &mut Game) -> Command {
        let command = self.decide(game);
        game.set_movement_intent(command.movement);
        if command.jump {
            game.press_jump();
            game.release_jump();
        }
        command
    }

    fn decide(&mut self, game: &Game) -> Command {
        let actor = &game.state().actor;

        if actor.is_jumping {
            let movement = if self.air_right > 0 {
                self.air_right -= 1;
                RIGHT
            } else {
                IDLE
            };
            return Command {
                movement,
                jump: false,
            };
        }
        self.air_right = 0;

        if self.retreat > 0 {
            self.retreat -= 1;
            return Command {
                movement: LEFT,
                jump: false,
            };
        }

        if hazard_ahead(game) {
            if let Some(hold) = best_jump(game) {
                // The launch tick itself consumes one tick of right input
                self.air_right = hold.saturating_sub(1);
                return Command {
                    movement: RIGHT,
                    jump: true,
                };
            }
        }

        if step_is_safe(game) {
            Command {
                movement: RIGHT,
                jump: false,
            }
        } else {
            self.retreat = RETREAT_TICKS.saturating_sub(1);
            Command {
                movement: LEFT,
                jump: false,
            }
        }
    }
}

/// Whether a hazard starts within the lookahead in front of the duck
fn hazard_ahead(game: &Game) -> bool {
    let x = game.state().actor.pos.x;
    let front = x + game.tuning().actor_size;

    game.current_level().obstacles.iter().any(|o| {
        let (ox, ow) = o.span();
        o.is_hazard() && ox + ow > x && ox - front <= LOOKAHEAD
    })
}

fn is_hit(event: Option<GameEvent>) -> bool {
    matches!(
        event,
        Some(GameEvent::LifeLost { .. } | GameEvent::GameOver)
    )
}

/// Landing x of a jump holding right for `hold` ticks, if it is survivable
fn simulate_jump(game: &Game, hold: u32) -> Option<f32> {
    let mut sim = game.clone();
    let level = sim.level_index();

    sim.set_movement_intent(RIGHT);
    sim.press_jump();
    sim.release_jump();

    for n in 0..MAX_SIM_TICKS {
        if n == hold {
            sim.set_movement_intent(IDLE);
        }
        let event = sim.tick();
        if is_hit(event) {
            return None;
        }
        if sim.level_index() != level || event == Some(GameEvent::Won) {
            return Some(f32::INFINITY);
        }
        if !sim.state().actor.is_jumping {
            return Some(sim.state().actor.pos.x);
        }
    }
    None
}

/// Right-hold length of the survivable jump that lands farthest forward
fn best_jump(game: &Game) -> Option<u32> {
    let x = game.state().actor.pos.x;

    PLANS
        .iter()
        .filter_map(|&hold| simulate_jump(game, hold).map(|landing| (hold, landing)))
        .filter(|&(_, landing)| landing > x)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(hold, _)| hold)
}

/// Whether walking right for one tick keeps the duck alive and on the ground
fn step_is_safe(game: &Game) -> bool {
    let mut sim = game.clone();
    sim.set_movement_intent(RIGHT);
    let event = sim.tick();
    !is_hit(event) && !sim.state().actor.is_jumping
}
