//! Segment extractors.
//!
//! Each extractor looks at the unclaimed part of a journey and proposes
//! the segment it recognises, if any. The driver decides which proposal
//! to accept.

use tracing::trace;

use super::validate::trim_unserved;
use crate::domain::{Segment, SegmentKind, Station};

/// Smallest index gap between the outer stops of an express-with-stop run.
const EXPRESS_WITH_STOP_MIN_SPAN: usize = 4;

/// Extract the run of consecutive stops starting at the first stop at or
/// after `start`.
///
/// A station joins the run while it is a stop and at least one of its
/// neighbours in `journey` is a stop. Neighbours are looked up in the full
/// journey, including stations already claimed by earlier segments, so a
/// run can start right after a claimed stop.
///
/// A single station is not a run: `None` is returned unless at least two
/// stations qualify.
pub fn contiguous_run(journey: &[Station], start: usize) -> Option<Segment> {
    let first_stop = start + journey.get(start..)?.iter().position(Station::is_stop)?;

    let run: Vec<Station> = journey[first_stop..]
        .iter()
        .enumerate()
        .take_while(|(offset, _)| has_stopping_neighbour(journey, first_stop + offset))
        .map(|(_, station)| station.clone())
        .collect();

    if run.len() < 2 {
        trace!(at = first_stop, len = run.len(), "no contiguous run");
        return None;
    }

    Segment::new(SegmentKind::Contiguous, run).ok()
}

fn has_stopping_neighbour(journey: &[Station], pos: usize) -> bool {
    let stops_at = |p: usize| journey.get(p).is_some_and(Station::is_stop);
    stops_at(pos) && ((pos > 0 && stops_at(pos - 1)) || stops_at(pos + 1))
}

/// Extract every express-with-one-stop run from `stations`.
///
/// Slides a window over consecutive stops `(A, B, C)`. When `C` is at least
/// four positions after `A` the window becomes a segment from `A` to `C`
/// and the scan resumes after `C`; otherwise the window moves on by one
/// stop. Segments come out left to right and never overlap.
pub fn express_with_stop(stations: &[Station]) -> Vec<Segment> {
    let stations = trim_unserved(stations);
    let stops: Vec<usize> = stations
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_stop())
        .map(|(pos, _)| pos)
        .collect();

    let mut segments = Vec::new();
    let mut i = 0;

    while i + 3 <= stops.len() {
        let (a, c) = (stops[i], stops[i + 2]);
        let span = stations[c].index().saturating_sub(stations[a].index());

        if span >= EXPRESS_WITH_STOP_MIN_SPAN {
            if let Ok(segment) =
                Segment::new(SegmentKind::ExpressWithStop, stations[a..=c].to_vec())
            {
                segments.push(segment);
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    segments
}

/// Extract a pure express run from a candidate slice.
///
/// The run spans the first stop to the last stop of the candidate and is
/// only produced when no stop lies strictly between them.
pub fn pure_express(candidate: &[Station]) -> Option<Segment> {
    let first = candidate.iter().position(Station::is_stop)?;
    let last = candidate.iter().rposition(Station::is_stop)?;

    if last <= first {
        return None;
    }
    if candidate[first + 1..last].iter().any(Station::is_stop) {
        trace!(
            from = %candidate[first],
            to = %candidate[last],
            "stops between express endpoints"
        );
        return None;
    }

    Segment::new(SegmentKind::PureExpress, candidate[first..=last].to_vec()).ok()
}

/// The leading slice of `stations` up to and including its second stop.
///
/// This is the candidate offered to [`pure_express`]: the shortest slice
/// that can hold an express run starting at the first station.
pub fn leading_candidate(stations: &[Station]) -> &[Station] {
    let end = stations
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_stop())
        .nth(1)
        .map_or(stations.len(), |(pos, _)| pos + 1);
    &stations[..end]
}
