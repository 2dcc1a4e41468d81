use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// One decoded weather-API response.
///
/// Field names mirror the wire format exactly (case-sensitive, no renames).
/// Every field is required: an incomplete payload fails decoding instead of
/// producing a partial or defaulted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Location name as reported by the service.
    pub name: String,
    /// The `main` measurement block.
    pub main: Temperature,
    /// Reported conditions, in the order the service returned them.
    /// The array may be empty, but the key itself must be present.
    pub weather: Vec<Condition>,
}

/// The numeric reading nested under `main`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Degrees, in whatever unit the API query requested (OpenWeather
    /// defaults to Kelvin). The payload carries no unit marker.
    pub temp: f64,
}

/// One weather-phenomenon descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable summary, e.g. "clear sky".
    pub description: String,
    /// Service-defined condition code, e.g. 800 for clear.
    pub id: i64,
}

impl WeatherRecord {
    /// Decode a record from a JSON byte buffer.
    ///
    /// Pure and synchronous; safe to call from any number of threads.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(DecodeError::from)
    }

    /// Decode a record from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        Self::from_json(text.as_bytes())
    }

    /// Encode the record back to JSON bytes.
    ///
    /// Decoding the output yields a record equal to `self`.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
