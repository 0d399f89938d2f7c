//! Current weather response model (OpenWeatherMap `data/2.5/weather`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
    #[serde(default)]
    pub wind: Option<WeatherWind>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherWind {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

impl WeatherResponse {
    /// The first reported condition, if any
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}
