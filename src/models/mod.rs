//! Data models module
//!
//! This module contains the request type of an interaction and the schema
//! structs of every upstream response.

pub mod request;
pub mod weather;
pub mod movie;
pub mod geocode;
pub mod text;

// Re-export commonly used models
pub use request::CommandRequest;
pub use weather::{WeatherResponse, WeatherCondition, WeatherMain, WeatherWind};
pub use movie::{SearchHit, MovieDetails, PremieresResponse, PremiereItem};
pub use geocode::{GeocodePlace, Coordinates};
pub use text::{AffirmationResponse, TranslateRequest, TranslateResponse, TranslatedText};
