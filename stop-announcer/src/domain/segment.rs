//! Journey segment type.
//!
//! A `Segment` is a classified run of stations. The announcer partitions a
//! journey into segments and renders one clause per segment.

use super::{DomainError, Station};

/// How a segment describes the train's behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Consecutive stopping stations
    Contiguous,
    /// Two stops with only express stations between them
    PureExpress,
    /// Three stops, the middle one amid an otherwise express run
    ExpressWithStop,
}

impl SegmentKind {
    /// Returns true for either express kind.
    pub fn is_express(self) -> bool {
        matches!(self, SegmentKind::PureExpress | SegmentKind::ExpressWithStop)
    }

    /// Returns true for a contiguous run.
    pub fn is_contiguous(self) -> bool {
        matches!(self, SegmentKind::Contiguous)
    }
}

/// A classified sub-sequence of the journey.
///
/// # Invariants
///
/// - At least two stations
/// - First and last stations are stops
/// - `Contiguous`: every station is a stop
/// - `PureExpress`: exactly two stops
/// - `ExpressWithStop`: exactly three stops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    stations: Vec<Station>,
    stopping_stations: Vec<Station>,
}

impl Segment {
    /// Construct a segment, validating that the stations fit the kind.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the stations break any of the invariants above.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_announcer::domain::{Segment, SegmentKind, Station};
    ///
    /// let stations = vec![
    ///     Station::new("Central", true, 0),
    ///     Station::new("Roma St", false, 1),
    ///     Station::new("South Bank", true, 2),
    /// ];
    /// let segment = Segment::new(SegmentKind::PureExpress, stations).unwrap();
    /// assert_eq!(segment.order(), 0);
    /// assert_eq!(segment.last_stop().name(), "South Bank");
    ///
    /// // Express runs can't contain extra stops
    /// let stations = vec![
    ///     Station::new("Central", true, 0),
    ///     Station::new("Roma St", true, 1),
    ///     Station::new("South Bank", true, 2),
    /// ];
    /// assert!(Segment::new(SegmentKind::PureExpress, stations).is_err());
    /// ```
    pub fn new(kind: SegmentKind, stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::InvalidSegment(
                "segment must contain at least two stations",
            ));
        }

        let starts_at_stop = stations.first().is_some_and(Station::is_stop);
        let ends_at_stop = stations.last().is_some_and(Station::is_stop);
        if !starts_at_stop || !ends_at_stop {
            return Err(DomainError::InvalidSegment(
                "segment must start and end at a stop",
            ));
        }

        let stopping_stations: Vec<Station> =
            stations.iter().filter(|s| s.is_stop()).cloned().collect();

        match kind {
            SegmentKind::Contiguous if stopping_stations.len() != stations.len() => {
                return Err(DomainError::InvalidSegment(
                    "contiguous segment must stop at every station",
                ));
            }
            SegmentKind::PureExpress if stopping_stations.len() != 2 => {
                return Err(DomainError::InvalidSegment(
                    "express segment must have exactly two stops",
                ));
            }
            SegmentKind::ExpressWithStop if stopping_stations.len() != 3 => {
                return Err(DomainError::InvalidSegment(
                    "express segment with a stop must have exactly three stops",
                ));
            }
            _ => {}
        }

        Ok(Self {
            kind,
            stations,
            stopping_stations,
        })
    }

    /// Returns the kind of this segment.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns all stations in the segment, in journey order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the stations where the train stops.
    pub fn stopping_stations(&self) -> &[Station] {
        &self.stopping_stations
    }

    /// Returns the number of stations the segment covers.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Sort key: the index of the first station.
    pub fn order(&self) -> usize {
        self.stations[0].index()
    }

    /// Returns the first stop (always the first station).
    pub fn first_stop(&self) -> &Station {
        &self.stopping_stations[0]
    }

    /// Returns the last stop (always the last station).
    pub fn last_stop(&self) -> &Station {
        &self.stopping_stations[self.stopping_stations.len() - 1]
    }
}
