//! # Particle Field Simulation
//!
//! Owns the particle population and the cursor follower, and applies the
//! pointer rules from `field-physics` to them as host events arrive.

pub mod cursor;
pub mod field;
pub mod params;

pub use cursor::*;
pub use field::*;
pub use params::*;
