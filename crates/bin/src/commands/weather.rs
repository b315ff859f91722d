//! Weather command - normalizes a weather payload of any known shape.

use vane::{Value, payload::WeatherSnapshot};

use crate::cli::WeatherArgs;
use crate::input::read_payload;
use crate::output::{OutputFormat, print_table};

/// Run the weather command
pub fn run(args: &WeatherArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let payload = read_payload(args.input.input.as_deref())?;
    let snapshot = WeatherSnapshot::from_payload(&payload);

    match format {
        OutputFormat::Human => print_table(&["FIELD", "VALUE"], &rows(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&snapshot)?),
    }

    Ok(())
}

fn rows(snapshot: &WeatherSnapshot) -> Vec<Vec<String>> {
    let temperature = if snapshot.temperature_missing() {
        "unknown".to_string()
    } else {
        format!(
            "{}°C / {}°F",
            Value::Float(snapshot.celsius),
            Value::Float(snapshot.fahrenheit)
        )
    };
    let raining = if snapshot.raining { "yes" } else { "no" };

    [
        ("station", snapshot.station.clone()),
        ("temperature", temperature),
        ("wind", format!("{} {}", Value::Float(snapshot.wind_speed), snapshot.wind_direction)),
        ("condition", snapshot.condition.clone()),
        ("raining", raining.to_string()),
    ]
    .into_iter()
    .map(|(field, value)| vec![field.to_string(), value])
    .collect()
}
