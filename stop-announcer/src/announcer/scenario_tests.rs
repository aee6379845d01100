//! End-to-end announcement scenarios on the Central to Cannon Hill line.

use super::*;

const LINE: [&str; 10] = [
    "Central",
    "Roma St",
    "South Brisbane",
    "South Bank",
    "Park Road",
    "Buranda",
    "Coorparoo",
    "Norman Park",
    "Morningside",
    "Cannon Hill",
];

/// Stations from the start of the line with the given stop flags.
fn journey(stops: &[bool]) -> Vec<Station> {
    LINE.iter()
        .zip(stops)
        .enumerate()
        .map(|(i, (name, &stop))| Station::new(*name, stop, i))
        .collect()
}

fn announce(stops: &[bool]) -> String {
    Announcer::default().announcement(&journey(stops))
}

#[test]
fn express_with_stop() {
    assert_eq!(
        announce(&[true, false, false, true, false, true]),
        "This train runs express from Central to Buranda, stopping only at South Bank"
    );
}

#[test]
fn express() {
    assert_eq!(
        announce(&[true, false, false, true]),
        "This train runs express from Central to South Bank"
    );
}

#[test]
fn express_with_stop_then_express() {
    assert_eq!(
        announce(&[true, false, false, true, false, true, true, false, false, true]),
        "This train runs express from Central to Buranda, stopping only at South Bank \
         then runs express from Coorparoo to Cannon Hill"
    );
}

#[test]
fn express_with_stop_then_stopping_all() {
    assert_eq!(
        announce(&[true, false, false, true, false, true, true, true, true, true]),
        "This train runs express from Central to Buranda, stopping only at South Bank \
         then runs from Coorparoo to Cannon Hill stopping all stations"
    );
}

#[test]
fn only_stops() {
    assert_eq!(
        announce(&[true, true]),
        "This train stops at Central and Roma St only"
    );
}

#[test]
fn all_except_one() {
    assert_eq!(
        announce(&[true, true, false, true]),
        "This train stops at all stations except South Brisbane"
    );
}

#[test]
fn stopping_all_stations() {
    assert_eq!(
        announce(&[true; 10]),
        "This train runs from Central to Cannon Hill stopping all stations"
    );
}

#[test]
fn stations_after_last_stop_are_ignored() {
    assert_eq!(
        announce(&[true, true, true, true, false]),
        "This train runs from Central to South Bank stopping all stations"
    );
}

#[test]
fn trailing_express_does_not_count_for_simple_case() {
    // Two trailing express stations, but only Roma St is passed before the last stop
    assert_eq!(
        announce(&[true, false, true, true, false, false]),
        "This train stops at all stations except Roma St"
    );
}

#[test]
fn journey_without_start() {
    assert_eq!(
        announce(&[false, false, false, false, false]),
        "The journey must start with a station stop."
    );
}

#[test]
fn validation_errors() {
    let announcer = Announcer::default();

    assert_eq!(announcer.announce(&[]), Err(ValidationError::EmptyInput));
    assert_eq!(
        announcer.announce(&journey(&[true, false, false])),
        Err(ValidationError::InsufficientStops)
    );
    assert_eq!(
        announcer.announcement(&[]),
        "No stations found in supplied list."
    );
    assert_eq!(
        announcer.announcement(&journey(&[true])),
        "Please supply more than one station stop."
    );
}

#[test]
fn stopping_all_then_express_keeps_recovered_run() {
    // South Brisbane and South Bank are passed, then Park Road and Buranda form a run
    assert_eq!(
        announce(&[true, true, false, false, true, true]),
        "This train runs from Central to Roma St stopping all stations \
         then runs from Park Road to Buranda stopping all stations"
    );
}

#[test]
fn unclassifiable_tail_is_left_out() {
    assert_eq!(
        announce(&[true, true, true, false, false, true]),
        "This train runs from Central to South Brisbane stopping all stations"
    );
}

#[test]
fn passed_station_after_express_run_is_left_out() {
    assert_eq!(
        announce(&[true, false, false, true, false, true, false, true, false, true]),
        "This train runs express from Central to Buranda, stopping only at South Bank \
         then runs express from Norman Park to Cannon Hill"
    );
}

#[test]
fn announcer_is_deterministic() {
    let stations = journey(&[true, false, false, true, false, true, true, false, false, true]);
    let announcer = Announcer::new(AnnouncerConfig::default());
    assert_eq!(
        announcer.announcement(&stations),
        announcer.announcement(&stations)
    );
}
