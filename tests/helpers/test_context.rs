//! Test context for unified test setup
//!
//! This module provides a unified test context that wires the services to the
//! upstream mock server and an activity log inside a temporary directory.

use tempfile::TempDir;
use SemestryBot::config::Settings;
use SemestryBot::i18n::I18n;
use SemestryBot::models::CommandRequest;
use SemestryBot::services::ServiceFactory;

use super::telegram_mock::test_user_id;
use super::upstream_mock::*;

/// Unified test context that manages all test components
pub struct TestContext {
    pub upstream: UpstreamMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub i18n: I18n,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with all components initialized
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        super::init_test_logging();

        let temp_dir = tempfile::tempdir()?;
        let upstream = UpstreamMockServer::new().await;
        let settings = Self::create_test_settings(&upstream, &temp_dir);

        let services = ServiceFactory::new(settings.clone())?;
        let i18n = I18n::new(&settings.i18n)?;

        Ok(Self {
            upstream,
            settings,
            services,
            i18n,
            temp_dir,
        })
    }

    /// Create test-specific settings
    fn create_test_settings(upstream: &UpstreamMockServer, temp_dir: &TempDir) -> Settings {
        let mut settings = Settings::default();

        settings.bot.token = "12345:test_token".to_string();

        settings.apis.weather_url = upstream.url(WEATHER_PATH);
        settings.apis.weather_icon_url = upstream.url(ICON_PATH);
        settings.apis.movie_search_url = upstream.url(MOVIE_SEARCH_PATH);
        settings.apis.movie_site_url = "https://www.kinopoisk.ru".to_string();
        settings.apis.movie_details_url = upstream.url(MOVIE_DETAILS_PATH);
        settings.apis.poster_url = upstream.url(POSTER_PATH);
        settings.apis.premieres_url = upstream.url(PREMIERES_PATH);
        settings.apis.geocoding_url = upstream.url(GEOCODING_PATH);
        settings.apis.translation_url = upstream.url(TRANSLATION_PATH);
        settings.apis.affirmation_url = upstream.url(AFFIRMATION_PATH);
        settings.apis.timeout_seconds = Some(5);

        settings.keys.weather = WEATHER_KEY.to_string();
        settings.keys.kinopoisk_unofficial = KINOPOISK_UNOFFICIAL_KEY.to_string();
        settings.keys.kinopoisk_dev = KINOPOISK_DEV_KEY.to_string();
        settings.keys.deepl = DEEPL_KEY.to_string();

        settings.logging.directory = temp_dir.path().join("bot").to_string_lossy().to_string();
        settings.activity.directory = temp_dir.path().join("activity").to_string_lossy().to_string();

        settings
    }

    /// Request as produced by typing `/<command> <args>`
    pub fn command(&self, command: &str, args: &str) -> CommandRequest {
        let text = if args.is_empty() {
            format!("/{}", command)
        } else {
            format!("/{} {}", command, args)
        };
        CommandRequest::new(command, args, test_user_id(), "ru", &text)
    }

    /// Request as produced by pressing a button carrying `data`
    pub fn callback(&self, data: &str) -> CommandRequest {
        CommandRequest::new("most_wanted", data, test_user_id(), "ru", data)
    }

    /// Request for free text
    pub fn free_text(&self, text: &str) -> CommandRequest {
        CommandRequest::new("", "", test_user_id(), "ru", text)
    }

    /// Activity log of the test user, empty when nothing was written
    pub fn activity_log(&self) -> String {
        let path = self.services.activity_log.log_path(test_user_id());
        std::fs::read_to_string(path).unwrap_or_default()
    }

    /// Number of entries in the test user's activity log
    pub fn activity_entries(&self) -> usize {
        self.activity_log()
            .matches(&format!("[user_id: {}]:User: ", test_user_id()))
            .count()
    }
}
