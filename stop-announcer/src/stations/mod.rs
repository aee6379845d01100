//! Station list sources.
//!
//! Reads the ordered station list a journey is announced from, either the
//! line format (`"<name>, <true|false>"` per line) or a JSON array.

mod error;
mod source;

pub use error::SourceError;
pub use source::{StationDto, parse_line, parse_stations, read_stations, stations_from_json};
