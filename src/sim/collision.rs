//! Hazard detection against level geometry
//!
//! Blocks do not push the duck sideways. A block only registers when the
//! duck's box sinks below the block's top surface, and a gap only registers
//! once the duck has dropped through the missing ground.

use super::level::{Level, Obstacle};
use super::state::Actor;
use crate::tuning::Tuning;

/// Whether `[a_x, a_x + a_w)` and `[b_x, b_x + b_w)` overlap
#[inline]
pub fn spans_overlap(a_x: f32, a_w: f32, b_x: f32, b_w: f32) -> bool {
    a_x + a_w > b_x && a_x < b_x + b_w
}

/// Whether the duck touches a single obstacle's hazard zone
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let size = tuning.actor_size;
    let bottom = actor.pos.y + size;

    match *obstacle {
        Obstacle::Block { x, width, height } => {
            spans_overlap(actor.pos.x, size, x, width) && bottom > tuning.ground_height - height
        }
        Obstacle::Gap { x, width } => {
            spans_overlap(actor.pos.x, size, x, width)
                && bottom > tuning.ground_height + tuning.gap_tolerance
        }
        Obstacle::Finish { .. } => false,
    }
}

/// Whether the duck touches any hazard in the level
pub fn check_collision(actor: &Actor, level: &Level, tuning: &Tuning) -> bool {
    level
        .obstacles
        .iter()
        .any(|obstacle| hits_obstacle(actor, obstacle, tuning))
}
