//! # folio-gui
//!
//! Geometry and animation helpers shared by the page effects.
//!
//! This crate has no knowledge of any document model. Hosts hand in rectangles
//! and points in CSS pixels and receive ratios, eased values and offsets back.

mod intersection;
mod primitives;
pub mod transition;

pub use intersection::*;
pub use primitives::*;
pub use transition::*;
