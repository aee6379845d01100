//! Journey validation and trimming.

use crate::domain::Station;

/// A station list that can't be announced.
///
/// The `Display` text is the message shown to passengers in place of an
/// announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No stations at all
    #[error("No stations found in supplied list.")]
    EmptyInput,

    /// First station is passed through
    #[error("The journey must start with a station stop.")]
    MustStartAtStop,

    /// No station is a stop
    #[error("No station stops found in supplied list.")]
    NoStops,

    /// Only one station is a stop
    #[error("Please supply more than one station stop.")]
    InsufficientStops,
}

/// Check a station list against the journey rules.
///
/// Rules are checked in order and the first failure is returned:
/// 1. The list is non-empty
/// 2. The first station is a stop
/// 3. At least one station is a stop
/// 4. More than one station is a stop
pub fn validate(stations: &[Station]) -> Result<(), ValidationError> {
    let first = stations.first().ok_or(ValidationError::EmptyInput)?;

    if !first.is_stop() {
        return Err(ValidationError::MustStartAtStop);
    }

    match stations.iter().filter(|s| s.is_stop()).count() {
        0 => Err(ValidationError::NoStops),
        1 => Err(ValidationError::InsufficientStops),
        _ => Ok(()),
    }
}

/// Drop every station after the last stop.
///
/// Stations the train runs through after its final stop are never
/// announced. A list with no stops trims to empty.
pub fn trim_unserved(stations: &[Station]) -> &[Station] {
    let end = stations
        .iter()
        .rposition(Station::is_stop)
        .map_or(0, |last| last + 1);
    &stations[..end]
}
