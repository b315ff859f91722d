//! Weather readings.

use tracing::{debug, trace};

use crate::{
    resolve::{Policy, resolve, resolve_first},
    value::Value,
};

const CELSIUS: &[&str] = &["temp.celsius", "temperature.c", "c"];
const FAHRENHEIT: &[&str] = &["temp.fahrenheit", "temperature.f", "f"];
const WIND_SPEED: &[&str] = &["wind.speed", "wind_speed", "ws"];
const WIND_DIRECTION: &[&str] = &["wind.direction", "wind_dir", "wd"];
const CONDITION: &[&str] = &["conditions.summary", "condition", "summary"];
const RAINING: &[&str] = &["conditions.raining", "raining", "rain"];
const STATION: &[&str] = &["station.name", "station"];

/// A normalized weather reading.
///
/// Built from any of the payload shapes producers have used, for example
/// the current nested shape
///
/// ```json
/// {"temp": {"celsius": 21.5}, "wind": {"speed": 12, "direction": "NW"}}
/// ```
///
/// or the flat legacy shape `{"c": 21.5, "ws": 12, "wd": "NW"}`.
///
/// Missing temperatures are derived from the other scale when it is
/// present, and are `NaN` otherwise.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius
    pub celsius: f64,
    /// Temperature in degrees Fahrenheit
    pub fahrenheit: f64,
    /// Wind speed in the producer's unit
    pub wind_speed: f64,
    /// Compass direction, `"N/A"` when unknown
    pub wind_direction: String,
    /// Short human description, `"unknown"` when missing
    pub condition: String,
    /// Whether it is raining
    pub raining: bool,
    /// Reporting station, `"unknown"` when missing
    pub station: String,
}

impl WeatherSnapshot {
    /// Normalizes a raw payload. Never fails; absent fields take defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vane::{payload::WeatherSnapshot, value::Value};
    /// let legacy: Value = serde_json::from_str(r#"{"c": 20, "ws": 4, "rain": 1}"#)?;
    /// let snapshot = WeatherSnapshot::from_payload(&legacy);
    ///
    /// assert_eq!(snapshot.celsius, 20.0);
    /// assert_eq!(snapshot.fahrenheit, 68.0);
    /// assert_eq!(snapshot.wind_speed, 4.0);
    /// assert!(snapshot.raining);
    /// assert_eq!(snapshot.wind_direction, "N/A");
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_payload(payload: &Value) -> Self {
        let absent = Value::Undefined;
        let celsius = resolve_first(payload, CELSIUS, &absent).to_number();
        let fahrenheit = resolve_first(payload, FAHRENHEIT, &absent).to_number();

        let (celsius, fahrenheit) = match (celsius.is_nan(), fahrenheit.is_nan()) {
            (true, false) => (fahrenheit_to_celsius(fahrenheit), fahrenheit),
            (false, true) => (celsius, celsius_to_fahrenheit(celsius)),
            _ => (celsius, fahrenheit),
        };

        let snapshot = Self {
            celsius,
            fahrenheit,
            wind_speed: resolve_first(payload, WIND_SPEED, &Value::Int(0)).to_number(),
            wind_direction: text_field(payload, WIND_DIRECTION, "N/A"),
            condition: text_field(payload, CONDITION, "unknown"),
            raining: resolve_first(payload, RAINING, &Value::Bool(false)).to_bool(),
            station: text_field(payload, STATION, "unknown"),
        };

        debug!(
            station = %snapshot.station,
            celsius = snapshot.celsius,
            wind_speed = snapshot.wind_speed,
            "normalized weather payload"
        );
        snapshot
    }

    /// Returns true when neither temperature scale was present
    pub fn temperature_missing(&self) -> bool {
        self.celsius.is_nan() && self.fahrenheit.is_nan()
    }
}

impl From<&Value> for WeatherSnapshot {
    fn from(payload: &Value) -> Self {
        Self::from_payload(payload)
    }
}

/// First candidate holding a leaf, as text.
///
/// A legacy key such as `station` is also the parent of the newer
/// `station.name`, so a mapping or list found there is skipped rather than
/// rendered as text.
fn text_field(payload: &Value, candidates: &[&str], default: &str) -> String {
    let absent = Value::Undefined;
    candidates
        .iter()
        .map(|path| (path, resolve(payload, path, &absent, Policy::Defined)))
        .find(|(path, found)| {
            if found.is_structured() {
                trace!(path = %path, "skipping structured candidate for text field");
                return false;
            }
            !found.is_undefined()
        })
        .map_or_else(|| default.to_string(), |(_, found)| found.to_text())
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
