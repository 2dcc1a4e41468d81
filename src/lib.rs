//! Typed data model for OpenWeather current-weather responses.
//!
//! This crate defines:
//! - The decoded record types (`WeatherRecord`, `Temperature`, `Condition`)
//! - A decode/encode pair between JSON bytes and those records
//! - A structured decode error taxonomy (`DecodeError`)
//!
//! Fetching the payload over HTTP is the caller's job; this crate only owns
//! the data contract, so it can be reused by any binary or service that
//! talks to the API.

pub mod error;
pub mod model;

pub use error::DecodeError;
pub use model::{Condition, Temperature, WeatherRecord};
