//! Station list parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::SourceError;
use crate::domain::Station;

/// A station entry in a JSON station list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDto {
    pub name: String,
    pub stops: bool,
}

/// Parse one `"<name>, <flag>"` line.
///
/// Returns `None` unless the line has exactly two comma-separated fields.
/// Both fields are trimmed; the flag means "stops here" only when it reads
/// `true` in any letter case.
pub fn parse_line(line: &str) -> Option<(&str, bool)> {
    let mut fields = line.split(',');
    let (Some(name), Some(flag), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };

    Some((name.trim(), flag.trim().eq_ignore_ascii_case("true")))
}

/// Parse a station list in the line format.
///
/// Blank lines are skipped silently and malformed lines with a warning.
/// Each accepted station gets its position among accepted lines as index.
pub fn parse_stations(text: &str) -> Vec<Station> {
    let mut stations = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some((name, is_stop)) => {
                let index = stations.len();
                stations.push(Station::new(name, is_stop, index));
            }
            None => warn!(line, "skipping invalid station line"),
        }
    }

    stations
}

/// Parse a JSON array of `{"name": ..., "stops": ...}` entries.
pub fn stations_from_json(text: &str) -> Result<Vec<Station>, SourceError> {
    let dtos: Vec<StationDto> = serde_json::from_str(text)?;

    Ok(dtos
        .into_iter()
        .enumerate()
        .map(|(index, dto)| Station::new(dto.name, dto.stops, index))
        .collect())
}

/// Read a station list from a file.
///
/// Files with a `.json` extension are read as JSON, anything else in the
/// line format.
pub fn read_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, SourceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let stations = if is_json {
        stations_from_json(&text)?
    } else {
        parse_stations(&text)
    };

    debug!(path = %path.display(), count = stations.len(), "read station list");
    Ok(stations)
}
