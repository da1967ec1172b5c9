//! Constants for the particle field
//!
//! All positions are in percentage units of the particle container, so a
//! particle at (50, 50) sits in the middle regardless of the container size.

/// Number of particles created at initialization
pub const PARTICLE_COUNT: usize = 80;

/// Extent of the percentage space on each axis
pub const FIELD_EXTENT: f32 = 100.0;

/// Pointer proximity (percentage units) within which particles are repelled
pub const REPEL_RADIUS: f32 = 15.0;

/// Maximum displacement (percentage units) at zero distance from the pointer
pub const REPEL_STRENGTH: f32 = 3.0;

/// Fraction of the remaining distance to rest covered per pointer move
pub const RELAX_RATE: f32 = 0.1;

/// Visual scale of a repelled particle
pub const REPELLED_SCALE: f32 = 1.5;

/// Opacity of a repelled particle
pub const REPELLED_OPACITY: f32 = 1.0;

/// Visual scale of a particle at rest
pub const REST_SCALE: f32 = 1.0;

/// Opacity of a particle at rest
pub const REST_OPACITY: f32 = 0.8;

// Idle drift (looping keyframe animation run by the host)
/// Upper bound of the random drift start offset, in seconds
pub const DRIFT_DELAY_MAX: f32 = 6.0;

/// Shortest drift loop duration, in seconds
pub const DRIFT_DURATION_MIN: f32 = 4.0;

/// Random spread added on top of the shortest drift duration, in seconds
pub const DRIFT_DURATION_SPREAD: f32 = 4.0;

// Cursor follower
/// Fraction of the remaining distance the follower covers each frame
pub const FOLLOWER_EASE: f32 = 0.1;

/// Half size of the cursor dot in pixels (draw origin = pointer - offset)
pub const CURSOR_OFFSET: f32 = 10.0;

/// Half size of the follower ring in pixels
pub const FOLLOWER_OFFSET: f32 = 20.0;
