//! Kinematics and jump charge integration
//!
//! Velocities are per tick, not per second. Horizontal motion is direct
//! control: the intent sets `vel.x` outright each tick.

use super::level::Level;
use super::state::Actor;
use crate::tuning::Tuning;

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    /// Right wins when both are held
    #[inline]
    pub fn horizontal_velocity(&self, speed: f32) -> f32 {
        if self.right {
            speed
        } else if self.left {
            -speed
        } else {
            0.0
        }
    }
}

/// Start charging a jump. Ignored while airborne or already charging.
pub fn begin_charge(actor: &mut Actor) -> bool {
    if actor.is_jumping || actor.is_charging {
        return false;
    }
    actor.is_charging = true;
    actor.jump_charge = 0.0;
    true
}

/// Launch with the accumulated charge. No-op unless charging on the ground.
pub fn release_jump(actor: &mut Actor, tuning: &Tuning) -> bool {
    if !actor.is_charging || actor.is_jumping {
        return false;
    }
    actor.vel.y = tuning.launch_velocity(actor.jump_charge);
    actor.is_jumping = true;
    actor.is_charging = false;
    actor.jump_charge = 0.0;
    true
}

/// Grow the held charge by one tick's worth
pub fn accumulate_charge(actor: &mut Actor, tuning: &Tuning) {
    if actor.is_charging && !actor.is_jumping {
        actor.jump_charge = (actor.jump_charge + tuning.charge_rate).min(tuning.max_charge());
    }
}

/// Advance the duck's position by one tick
///
/// Vertical position moves by the previous tick's velocity before gravity is
/// added. Ground clamps the fall everywhere except inside a gap, and a duck
/// already below the surface is never pulled back up.
pub fn integrate(actor: &mut Actor, movement: MovementIntent, level: &Level, tuning: &Tuning) {
    let ground_y = tuning.ground_y();
    let size = tuning.actor_size;

    actor.vel.x = movement.horizontal_velocity(tuning.move_speed);

    // --- VERTICAL ---
    let sunk = actor.pos.y > ground_y;
    let supported = !sunk && !level.over_gap(actor.pos.x, size);

    if !actor.is_jumping && !supported {
        // Walked off into a gap: fall, and drop any held charge
        actor.is_jumping = true;
        actor.is_charging = false;
        actor.jump_charge = 0.0;
    }

    if actor.is_jumping {
        let next_y = actor.pos.y + actor.vel.y;
        if supported && next_y >= ground_y {
            // Landing
            actor.pos.y = ground_y;
            actor.is_jumping = false;
            actor.vel.y = 0.0;
        } else {
            actor.pos.y = next_y;
            actor.vel.y += tuning.gravity;
        }
    } else {
        actor.pos.y = ground_y;
    }

    // --- HORIZONTAL ---
    let mut x = actor.pos.x + actor.vel.x;
    if actor.pos.y > ground_y {
        // Pit walls
        if let Some((gx, gw)) = level.gap_at(actor.pos.x, size) {
            x = x.clamp(gx, (gx + gw - size).max(gx));
        }
    }
    actor.pos.x = x.clamp(0.0, level.max_x(size));
}
