//! Stopping-pattern announcements.
//!
//! Turns an ordered station list into a sentence such as "This train runs
//! express from Central to Buranda, stopping only at South Bank then runs
//! from Coorparoo to Cannon Hill stopping all stations".
//!
//! The pipeline is: validate, trim stations after the last stop, try the
//! short forms for small journeys, otherwise segment the journey and
//! compose one clause per segment.

mod compose;
mod config;
mod driver;
mod extract;
mod shortcut;
mod validate;

#[cfg(test)]
mod scenario_tests;

use tracing::debug;

use crate::domain::Station;

pub use compose::{NO_JOURNEY, Neighbours, compose, neighbours};
pub use config::AnnouncerConfig;
pub use driver::{Segmentation, segment};
pub use extract::{contiguous_run, express_with_stop, leading_candidate, pure_express};
pub use shortcut::simple_case;
pub use validate::{ValidationError, trim_unserved, validate};

/// Builds announcements for station lists.
///
/// Holds no per-journey state, so one announcer can serve any number of
/// independent calls.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    config: AnnouncerConfig,
}

impl Announcer {
    /// Create an announcer with the given configuration.
    pub fn new(config: AnnouncerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnnouncerConfig {
        &self.config
    }

    /// Describe the stopping pattern of `stations`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the station list fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_announcer::announcer::Announcer;
    /// use stop_announcer::domain::Station;
    ///
    /// let stations = vec![
    ///     Station::new("Central", true, 0),
    ///     Station::new("Roma St", false, 1),
    ///     Station::new("South Brisbane", false, 2),
    ///     Station::new("South Bank", true, 3),
    /// ];
    ///
    /// let text = Announcer::default().announce(&stations).unwrap();
    /// assert_eq!(text, "This train runs express from Central to South Bank");
    /// ```
    pub fn announce(&self, stations: &[Station]) -> Result<String, ValidationError> {
        validate(stations)?;

        let journey = trim_unserved(stations);
        if journey.len() < stations.len() {
            debug!(
                trimmed = stations.len() - journey.len(),
                "ignoring stations after the last stop"
            );
        }

        if let Some(text) = simple_case(journey) {
            debug!("simple journey, skipping segmentation");
            return Ok(text);
        }

        let segmentation = segment(journey, &self.config);
        Ok(compose(segmentation.segments, &self.config))
    }

    /// Like [`announce`](Self::announce), but a validation failure becomes
    /// its message so the caller always gets something to display.
    pub fn announcement(&self, stations: &[Station]) -> String {
        self.announce(stations)
            .unwrap_or_else(|err| err.to_string())
    }
}
