//! Dead-zone camera follow

/// Horizontal scroll for a duck at `actor_x`
///
/// The view stays put until the duck passes the dead zone, then tracks it
/// one-to-one.
#[inline]
pub fn camera_offset(actor_x: f32, dead_zone: f32) -> f32 {
    (actor_x - dead_zone).max(0.0)
}
