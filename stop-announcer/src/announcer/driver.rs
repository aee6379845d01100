//! Segmentation driver.
//!
//! Partitions a trimmed journey into segments by repeatedly asking the
//! extractors for a segment at the front of the unclaimed stations.
//!
//! The journey itself is never modified. Every accepted segment starts at
//! the first unclaimed station, so the claimed stations always form a
//! prefix of the journey and a single cursor tracks the claim boundary.

use tracing::{debug, trace, warn};

use super::config::AnnouncerConfig;
use super::extract::{contiguous_run, express_with_stop, leading_candidate, pure_express};
use super::validate::validate;
use crate::domain::{Segment, Station};

/// Result of segmenting a journey.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    /// Segments in the order they were extracted.
    pub segments: Vec<Segment>,
    /// Stations no segment could claim, in journey order.
    pub dropped: Vec<Station>,
}

/// The unclaimed suffix of a journey.
#[derive(Debug, Clone)]
struct WorkingSet<'a> {
    journey: &'a [Station],
    cursor: usize,
}

impl<'a> WorkingSet<'a> {
    fn new(journey: &'a [Station]) -> Self {
        Self { journey, cursor: 0 }
    }

    fn remaining(&self) -> &'a [Station] {
        &self.journey[self.cursor..]
    }

    fn is_empty(&self) -> bool {
        self.cursor >= self.journey.len()
    }

    /// Claim the next `count` stations, returning them.
    fn claim(&mut self, count: usize) -> &'a [Station] {
        let end = (self.cursor + count).min(self.journey.len());
        let claimed = &self.journey[self.cursor..end];
        self.cursor = end;
        claimed
    }
}

/// Partition a trimmed journey into segments.
///
/// Runs the extraction loop until every station is claimed or no extractor
/// can make progress. Any remainder gets one further pass (if enabled in
/// `config`) with its leading express stations set aside; whatever is still
/// unclaimed after that is reported in [`Segmentation::dropped`].
pub fn segment(journey: &[Station], config: &AnnouncerConfig) -> Segmentation {
    let mut work = WorkingSet::new(journey);
    let mut segments = Vec::new();
    let mut dropped = Vec::new();

    extract_all(&mut work, &mut segments);

    if !work.is_empty() && config.recover_leftovers {
        let unserved = work
            .remaining()
            .iter()
            .take_while(|s| s.is_express())
            .count();
        dropped.extend_from_slice(work.claim(unserved));

        let before = segments.len();
        extract_all(&mut work, &mut segments);
        debug!(
            recovered = segments.len() - before,
            "re-segmented leftover stations"
        );
    }

    dropped.extend_from_slice(work.remaining());

    if !dropped.is_empty() {
        let names: Vec<&str> = dropped.iter().map(Station::name).collect();
        warn!(
            count = dropped.len(),
            stations = ?names,
            "stations left out of the announcement"
        );
    }

    Segmentation { segments, dropped }
}

/// Claim segments from the front of `work` until it is empty, invalid,
/// or no extractor matches.
fn extract_all(work: &mut WorkingSet<'_>, segments: &mut Vec<Segment>) {
    while !work.is_empty() {
        let remaining = work.remaining();

        if let Err(e) = validate(remaining) {
            debug!(
                at = remaining[0].index(),
                reason = %e,
                "stopping segmentation"
            );
            return;
        }

        let Some(next) = next_segment(work) else {
            debug!(at = remaining[0].index(), "no extractor matched");
            return;
        };

        debug!(
            kind = ?next.kind(),
            from = %next.first_stop(),
            to = %next.last_stop(),
            "extracted segment"
        );
        work.claim(next.station_count());
        segments.push(next);
    }
}

/// Ask the extractors, in priority order, for a segment at the front.
fn next_segment(work: &WorkingSet<'_>) -> Option<Segment> {
    let remaining = work.remaining();
    let front = remaining.first()?.index();

    if let Some(run) = contiguous_run(work.journey, work.cursor) {
        return Some(run);
    }

    if let Some(run) = express_with_stop(remaining).into_iter().next() {
        if run.order() == front {
            return Some(run);
        }
        trace!(order = run.order(), front, "express-with-stop run not at front");
    }

    pure_express(leading_candidate(remaining))
}
