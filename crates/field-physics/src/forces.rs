//! Pointer interaction rules for the particle field
//!
//! All functions here are pure: they take positions in, return positions out,
//! and never touch particle state directly.

use glam::Vec2;

use crate::constants::*;

/// Displacement applied to a particle by a nearby pointer
///
/// Returns `None` when the particle's current position is at or beyond
/// `radius` from the pointer. Otherwise the particle is pushed away from the
/// pointer with a linear falloff: `strength` at distance 0, nothing at `radius`.
pub fn repel_offset(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Option<Vec2> {
    let delta = position - pointer;
    let distance = delta.length();

    // NaN distances fall through to the relax path, same as out-of-range ones
    if distance.is_nan() || distance >= radius {
        return None;
    }

    let angle = delta.y.atan2(delta.x);
    let force = (radius - distance) / radius;
    Some(Vec2::new(angle.cos(), angle.sin()) * force * strength)
}

/// Repel offset with the default radius and strength
pub fn default_repel_offset(position: Vec2, pointer: Vec2) -> Option<Vec2> {
    repel_offset(position, pointer, REPEL_RADIUS, REPEL_STRENGTH)
}

/// Move `position` a fraction `rate` of the remaining way back to `rest`
pub fn relax_step(position: Vec2, rest: Vec2, rate: f32) -> Vec2 {
    position + (rest - position) * rate
}

/// One frame of the cursor follower ease
///
/// The follower covers `rate` of the remaining distance to the pointer. Pure so
/// it can be driven by any frame scheduler.
pub fn follow_step(previous: Vec2, pointer: Vec2, rate: f32) -> Vec2 {
    previous + (pointer - previous) * rate
}
