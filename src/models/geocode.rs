//! Geocoding search result model (Nominatim `search?format=json`)

use serde::{Deserialize, Serialize};
use crate::utils::errors::{ApiError, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodePlace {
    /// Decimal degrees as sent upstream, e.g. `"55.7504461"`
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodePlace {
    pub fn coordinates(&self) -> ApiResult<Coordinates> {
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| ApiError::Decode(format!("bad coordinate {:?}: {}", value, e)))
        };

        Ok(Coordinates {
            latitude: parse(&self.lat)?,
            longitude: parse(&self.lon)?,
        })
    }
}
