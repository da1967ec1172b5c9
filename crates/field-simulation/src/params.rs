//! Field and cursor parameters for runtime tuning

use field_physics::*;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Number of particles created at initialization
    pub count: usize,
    /// Pointer distance (percent) within which particles are repelled
    pub repel_radius: f32,
    /// Displacement (percent) at zero distance
    pub repel_strength: f32,
    /// Fraction of the way back to rest per pointer move
    pub relax_rate: f32,
    /// Fixed seed for rest positions; random when unset
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            relax_rate: RELAX_RATE,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorParams {
    /// Fraction of the remaining distance the follower covers per frame
    pub follower_ease: f32,
    pub cursor_offset: f32,
    pub follower_offset: f32,
    // Hover feedback over interactive elements
    pub hover_cursor_scale: f32,
    pub hover_follower_scale: f32,
    pub hover_border_alpha: f32,
    pub idle_border_alpha: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            follower_ease: FOLLOWER_EASE,
            cursor_offset: CURSOR_OFFSET,
            follower_offset: FOLLOWER_OFFSET,
            hover_cursor_scale: 1.5,
            hover_follower_scale: 1.2,
            hover_border_alpha: 0.8,
            idle_border_alpha: 0.3,
        }
    }
}
