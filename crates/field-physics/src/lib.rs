//! # Field Physics
//!
//! Core math for the decorative particle field: particle records, the pointer
//! repel rule, the relax step back toward rest and the cursor follower ease.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
