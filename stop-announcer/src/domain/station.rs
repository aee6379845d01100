//! Station type.

use std::fmt;

/// One station on the line, in journey order.
///
/// `index` is the station's position in the full input sequence and is the
/// only ordering key. Equality compares all three fields, so two stations
/// that share a name are still distinct if they sit at different positions.
///
/// # Examples
///
/// ```
/// use stop_announcer::domain::Station;
///
/// let central = Station::new("Central", true, 0);
/// assert_eq!(central.name(), "Central");
/// assert!(central.is_stop());
/// assert_eq!(central.index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    name: String,
    is_stop: bool,
    index: usize,
}

impl Station {
    /// Creates a station.
    pub fn new(name: impl Into<String>, is_stop: bool, index: usize) -> Self {
        Self {
            name: name.into(),
            is_stop,
            index,
        }
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the train stops here.
    pub fn is_stop(&self) -> bool {
        self.is_stop
    }

    /// Returns true if the train passes through without stopping.
    pub fn is_express(&self) -> bool {
        !self.is_stop
    }

    /// Returns the position in the full input sequence.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let station = Station::new("Roma St", false, 1);
        assert_eq!(station.name(), "Roma St");
        assert!(!station.is_stop());
        assert!(station.is_express());
        assert_eq!(station.index(), 1);
    }

    #[test]
    fn display_is_name() {
        let station = Station::new("South Bank", true, 3);
        assert_eq!(station.to_string(), "South Bank");
    }

    #[test]
    fn equality_uses_all_fields() {
        let a = Station::new("Central", true, 0);
        assert_eq!(a, Station::new("Central", true, 0));
        assert_ne!(a, Station::new("Central", true, 4));
        assert_ne!(a, Station::new("Central", false, 0));
        assert_ne!(a, Station::new("Roma St", true, 0));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new("Central", true, 0));
        assert!(set.contains(&Station::new("Central", true, 0)));
        assert!(!set.contains(&Station::new("Central", true, 7)));
    }
}
