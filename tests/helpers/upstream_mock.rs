//! Mock upstream APIs for handler tests
//!
//! One wiremock server stands in for every third-party service; each service
//! gets its own path prefix so call counts can be checked per upstream.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const WEATHER_PATH: &str = "/weather";
pub const ICON_PATH: &str = "/img/wn";
pub const MOVIE_SEARCH_PATH: &str = "/index.php";
pub const MOVIE_DETAILS_PATH: &str = "/v1.4/movie";
pub const POSTER_PATH: &str = "/posters/kp";
pub const PREMIERES_PATH: &str = "/premieres";
pub const GEOCODING_PATH: &str = "/search";
pub const TRANSLATION_PATH: &str = "/v2/translate";
pub const AFFIRMATION_PATH: &str = "/affirmation";

pub const WEATHER_KEY: &str = "weather-key";
pub const KINOPOISK_UNOFFICIAL_KEY: &str = "unofficial-key";
pub const KINOPOISK_DEV_KEY: &str = "dev-key";
pub const DEEPL_KEY: &str = "deepl-key";

/// Stand-in for every upstream API
pub struct UpstreamMockServer {
    pub server: MockServer,
}

impl UpstreamMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Successful weather lookup for `city`
    pub async fn mock_weather(&self, city: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .and(query_param("appid", WEATHER_KEY))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weather_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "cod": status.to_string(), "message": "city not found" })))
            .mount(&self.server)
            .await;
    }

    /// Search page served for `query`
    pub async fn mock_movie_search(&self, query: &str, html: &str) {
        Mock::given(method("GET"))
            .and(path(MOVIE_SEARCH_PATH))
            .and(query_param("kp_query", query))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_movie_details(&self, film_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", MOVIE_DETAILS_PATH, film_id)))
            .and(header("X-API-KEY", KINOPOISK_DEV_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_movie_details_status(&self, film_id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", MOVIE_DETAILS_PATH, film_id)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Premieres listing of `count` numbered films
    pub async fn mock_premieres(&self, count: usize) {
        Mock::given(method("GET"))
            .and(path(PREMIERES_PATH))
            .and(header("X-API-KEY", KINOPOISK_UNOFFICIAL_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(premieres_json(count)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_premieres_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(PREMIERES_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_geocoding(&self, query: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(GEOCODING_PATH))
            .and(query_param("format", "json"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Translation of `source` into `translation`
    pub async fn mock_translation(&self, source: &str, translation: &str) {
        Mock::given(method("POST"))
            .and(path(TRANSLATION_PATH))
            .and(header("Authorization", format!("DeepL-Auth-Key {}", DEEPL_KEY).as_str()))
            .and(body_json(json!({ "text": [source], "target_lang": "RU" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "translations": [{ "detected_source_language": "EN", "text": translation }]
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_translation_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(TRANSLATION_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_affirmation(&self, affirmation: &str) {
        Mock::given(method("GET"))
            .and(path(AFFIRMATION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "affirmation": affirmation })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_affirmation_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(AFFIRMATION_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Requests received under a path prefix
    pub async fn requests_to(&self, prefix: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().starts_with(prefix))
            .count()
    }

    /// Requests received by any upstream
    pub async fn total_requests(&self) -> usize {
        self.server.received_requests().await.unwrap_or_default().len()
    }
}

/// Weather payload shaped like the real API
pub fn weather_json(temp: f64, humidity: f64, description: &str) -> Value {
    json!({
        "weather": [{ "id": 800, "main": "Clear", "description": description, "icon": "01d" }],
        "main": { "temp": temp, "feels_like": temp - 1.0, "humidity": humidity, "pressure": 1012 },
        "wind": { "speed": 3.5, "deg": 180 },
        "name": "Moscow"
    })
}

pub fn premieres_json(count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "kinopoiskId": 1000 + i,
                "nameRu": format!("Фильм {}", i),
                "nameEn": null,
                "year": 2024,
                "duration": 90 + i,
                "premiereRu": "2024-03-01"
            })
        })
        .collect();

    json!({ "total": count, "items": items })
}

/// Search page with one result per `(id, title, year)`
pub fn search_page(hits: &[(u64, &str, &str)]) -> String {
    let elements: String = hits
        .iter()
        .map(|(id, title, year)| {
            format!(
                r#"<div class="element most_wanted">
                     <div class="right"><div class="rating">8.5</div></div>
                     <div class="info">
                       <p class="name"><a href="/film/{id}/">{title}</a> <span class="year">{year}</span></p>
                       <span class="gray">{title}, 136 мин</span>
                     </div>
                   </div>"#
            )
        })
        .collect();

    format!(r#"<html><body><div class="search_results">{}</div></body></html>"#, elements)
}
