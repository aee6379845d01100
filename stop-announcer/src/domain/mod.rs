//! Domain types for the stop announcer.
//!
//! Stations are created once from input and never mutated. Segments are
//! validated at construction, so the composer can rely on their shape.

mod error;
mod segment;
mod station;

pub use error::DomainError;
pub use segment::{Segment, SegmentKind};
pub use station::Station;
