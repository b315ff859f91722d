//! Payload normalization integration tests

use vane::{
    Error, Value,
    payload::{FieldMap, WeatherSnapshot},
};

use crate::helpers::*;

#[test]
fn test_weather_shapes_normalize_identically() {
    let current = WeatherSnapshot::from_payload(&current_weather());
    let legacy = WeatherSnapshot::from_payload(&legacy_weather());
    assert_eq!(current, legacy);
    assert_eq!(current.station, "North Ridge");
    assert_eq!(current.celsius, 18.5);
    assert_eq!(current.fahrenheit, 65.3);
    assert_eq!(current.wind_direction, "SW");
    assert!(current.raining);
}

#[test]
fn test_weather_snapshot_serializes() {
    let snapshot = WeatherSnapshot::from_payload(&legacy_weather());
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["wind_speed"], 22.0);
    assert_eq!(json["condition"], "Showers");
}

#[test]
fn test_field_map_over_both_generations() {
    let map = FieldMap::from_json_str(
        r#"{
            "temp": ["temp.celsius", "c"],
            "direction": ["wind.direction", "wd"],
            "gust": {"path": ["wind.gust", "wg"], "default": 0},
            "station": "station.name"
        }"#,
    )
    .unwrap();

    let current = map.extract(&current_weather());
    assert_eq!(current.get("temp"), Some(&Value::Float(18.5)));
    assert_eq!(current.get("direction"), Some(&Value::from("SW")));
    assert_eq!(current.get("gust"), Some(&Value::Int(0)));
    assert_eq!(current.get("station"), Some(&Value::from("North Ridge")));

    let legacy = map.extract(&legacy_weather());
    assert_eq!(legacy.get("temp"), Some(&Value::Float(18.5)));
    assert_eq!(legacy.get("direction"), Some(&Value::from("SW")));
    // "station" is a string in the legacy shape, so "station.name" cannot descend
    assert_eq!(legacy.get("station"), Some(&Value::Null));
}

#[test]
fn test_field_map_rejects_malformed_entries() {
    let err = FieldMap::from_json_str(r#"{"temp": 42}"#).unwrap_err();
    assert!(err.is_contract_violation());
    match err {
        Error::InvalidMapping { field, reason } => {
            assert_eq!(field, "temp");
            assert!(reason.contains("42"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
