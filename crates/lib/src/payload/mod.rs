//! Normalizing raw payloads into typed records.
//!
//! Payload producers change shape over time, so every field is read through a
//! list of candidate paths and falls back to a default instead of failing.
//!
//! - [`WeatherSnapshot`] - the fixed weather record, with the legacy shapes
//!   it understands baked in
//! - [`FieldMap`] - a caller-supplied list of named fields, parsed from JSON

pub mod mapping;
pub mod weather;

pub use mapping::{Field, FieldMap};
pub use weather::WeatherSnapshot;
