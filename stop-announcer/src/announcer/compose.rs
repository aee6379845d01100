//! Announcement composition.
//!
//! Orders segments along the journey and renders each as a clause:
//!
//! - `ExpressWithStop`: "runs express from A to C, stopping only at B"
//! - `PureExpress`: "runs express from A to B"
//! - `Contiguous`: "runs from A to B stopping all stations"
//!
//! Clauses are joined with " then " after a "This train " prefix.

use super::config::AnnouncerConfig;
use crate::domain::{Segment, SegmentKind};

/// Announcement used when there are no segments to describe.
pub const NO_JOURNEY: &str = "No train journey found to process.";

/// What kind of segments sit either side of a segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub previous_contiguous: bool,
    pub next_contiguous: bool,
    pub previous_express: bool,
    pub next_express: bool,
}

impl Neighbours {
    fn between(previous: Option<&Segment>, next: Option<&Segment>) -> Self {
        let is = |segment: Option<&Segment>, test: fn(SegmentKind) -> bool| {
            segment.is_some_and(|s| test(s.kind()))
        };

        Self {
            previous_contiguous: is(previous, SegmentKind::is_contiguous),
            next_contiguous: is(next, SegmentKind::is_contiguous),
            previous_express: is(previous, SegmentKind::is_express),
            next_express: is(next, SegmentKind::is_express),
        }
    }
}

/// Compute neighbour flags for segments already sorted by order.
pub fn neighbours(ordered: &[Segment]) -> Vec<Neighbours> {
    (0..ordered.len())
        .map(|i| {
            let previous = i.checked_sub(1).and_then(|p| ordered.get(p));
            Neighbours::between(previous, ordered.get(i + 1))
        })
        .collect()
}

/// Render segments into the announcement text.
///
/// Segments may arrive in any order; they are stably sorted by
/// [`Segment::order`] first.
pub fn compose(mut segments: Vec<Segment>, config: &AnnouncerConfig) -> String {
    if segments.is_empty() {
        return NO_JOURNEY.to_string();
    }

    segments.sort_by_key(Segment::order);

    let clauses: Vec<String> = segments
        .iter()
        .zip(neighbours(&segments))
        .filter_map(|(segment, around)| render(segment, around, config))
        .collect();

    format!("This train {}", clauses.join(" then "))
}

fn render(segment: &Segment, around: Neighbours, config: &AnnouncerConfig) -> Option<String> {
    if config.elide_express_after_contiguous
        && segment.kind().is_express()
        && around.previous_contiguous
    {
        return None;
    }

    let first = segment.first_stop().name();
    let last = segment.last_stop().name();

    let clause = match segment.kind() {
        SegmentKind::ExpressWithStop => {
            let via = segment.stopping_stations()[1].name();
            format!("runs express from {first} to {last}, stopping only at {via}")
        }
        SegmentKind::PureExpress => format!("runs express from {first} to {last}"),
        SegmentKind::Contiguous => format!("runs from {first} to {last} stopping all stations"),
    };

    Some(clause)
}
