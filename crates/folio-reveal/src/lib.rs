//! # folio-reveal
//!
//! Marks page elements as revealed the first time they scroll into view and
//! schedules the per-category follow-up animation (skill bar fill, counter
//! tally, gauge sweep, staggered card entrance) on a virtual clock.

pub mod clock;
pub mod effects;
pub mod element;
pub mod error;
pub mod observer;
pub mod scene;

pub use clock::*;
pub use effects::*;
pub use element::*;
pub use error::*;
pub use observer::*;
pub use scene::*;
