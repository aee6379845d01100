//! Short announcements for small journeys.

use crate::domain::Station;

/// Describe a trimmed journey without segmenting it, if it's simple enough.
///
/// - Exactly one express station: "stops at all stations except ..."
/// - Exactly two stations, both stops: "stops at ... and ... only"
///
/// Returns `None` when the journey needs full segmentation.
pub fn simple_case(journey: &[Station]) -> Option<String> {
    let mut express = journey.iter().filter(|s| s.is_express());

    match (express.next(), express.next()) {
        (Some(only), None) => {
            return Some(format!(
                "This train stops at all stations except {}",
                only.name()
            ));
        }
        (Some(_), Some(_)) => return None,
        (None, _) => {}
    }

    match journey {
        [first, second] => Some(format!(
            "This train stops at {} and {} only",
            first.name(),
            second.name()
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey(data: &[(&str, bool)]) -> Vec<Station> {
        data.iter()
            .enumerate()
            .map(|(i, (name, stop))| Station::new(*name, *stop, i))
            .collect()
    }

    #[test]
    fn two_stops_only() {
        let stations = journey(&[("Central", true), ("Roma St", true)]);
        assert_eq!(
            simple_case(&stations).as_deref(),
            Some("This train stops at Central and Roma St only")
        );
    }

    #[test]
    fn all_except_one() {
        let stations = journey(&[
            ("Central", true),
            ("Roma St", true),
            ("South Brisbane", false),
            ("South Bank", true),
        ]);
        assert_eq!(
            simple_case(&stations).as_deref(),
            Some("This train stops at all stations except South Brisbane")
        );
    }

    #[test]
    fn single_express_between_two_stops() {
        let stations = journey(&[("Central", true), ("Roma St", false), ("South Bank", true)]);
        assert_eq!(
            simple_case(&stations).as_deref(),
            Some("This train stops at all stations except Roma St")
        );
    }

    #[test]
    fn two_express_needs_segmentation() {
        let stations = journey(&[
            ("Central", true),
            ("Roma St", false),
            ("South Brisbane", false),
            ("South Bank", true),
        ]);
        assert_eq!(simple_case(&stations), None);
    }

    #[test]
    fn three_stops_needs_segmentation() {
        let stations = journey(&[("Central", true), ("Roma St", true), ("South Bank", true)]);
        assert_eq!(simple_case(&stations), None);
    }
}
