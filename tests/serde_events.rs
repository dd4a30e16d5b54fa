//! Serialization of events and settings, with the `serde` feature.

#![cfg(feature = "serde")]

use std::time::Duration;

use stepsort::Algorithm;
use stepsort::DriverConfig;
use stepsort::SortingEvent;
use stepsort::Stepper;

#[test]
fn event_survives_json() {
    let mut stepper = Algorithm::Selection.stepper();
    stepper.init(&[3, 1, 2]).unwrap();
    let event = stepper.step();

    let json = serde_json::to_string(&event).unwrap();
    let back: SortingEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn algorithm_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&Algorithm::Quick).unwrap(), "\"quick\"");
    let back: Algorithm = serde_json::from_str("\"counting\"").unwrap();
    assert_eq!(back, Algorithm::Counting);
}

#[test]
fn config_deserializes() {
    let config = DriverConfig::default().with_delay(Duration::from_millis(125));
    let json = serde_json::to_string(&config).unwrap();
    let back: DriverConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn metadata_serializes() {
    let json = serde_json::to_value(Algorithm::Merge.info()).unwrap();
    assert_eq!(json["name"], "Merge Sort");
    assert_eq!(json["space"], "O(n)");
}
