use serde_json::error::Category;
use thiserror::Error;

/// Why a JSON payload failed to decode into a [`WeatherRecord`].
///
/// Exactly one variant applies to any failed decode; no partial record is
/// ever produced alongside one of these.
///
/// [`WeatherRecord`]: crate::model::WeatherRecord
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON text at all.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The input is valid JSON but a required key is absent.
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A key is present but its value has an incompatible type.
    #[error("type mismatch: {detail}")]
    TypeMismatch { detail: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => DecodeError::MalformedJson(err),
            Category::Data => {
                let detail = err.to_string();
                // Derived `Deserialize` reports an absent key as
                // "missing field `<name>`".
                match missing_field_name(&detail) {
                    Some(field) => DecodeError::MissingField { field },
                    None => DecodeError::TypeMismatch { detail },
                }
            }
        }
    }
}

fn missing_field_name(detail: &str) -> Option<String> {
    let rest = detail.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
