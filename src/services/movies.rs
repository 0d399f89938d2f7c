//! Movie service implementation
//!
//! This service scrapes the movie search page for the first hit, fetches
//! long-form descriptions from the official API, builds poster and site
//! links, and loads the monthly premieres listing from the unofficial API.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;
use crate::config::settings::Settings;
use crate::models::{SearchHit, MovieDetails, PremieresResponse, PremiereItem};
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::logging::log_api_request;

const API_KEY_HEADER: &str = "X-API-KEY";

/// Movie search, details and premieres
#[derive(Clone, Debug)]
pub struct MovieService {
    client: Client,
    settings: Settings,
}

impl MovieService {
    /// Create a new MovieService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = super::build_client(&settings, super::BROWSER_USER_AGENT)?;
        Ok(Self { client, settings })
    }

    /// First result of the search page for `title`
    pub async fn search(&self, title: &str) -> ApiResult<SearchHit> {
        if title.trim().is_empty() {
            return Err(ApiError::InvalidInput("title is empty".to_string()));
        }

        log_api_request("movie_search", title);

        let response = self
            .client
            .get(&self.settings.apis.movie_search_url)
            .query(&[("kp_query", title)])
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let html = response.text().await.map_err(ApiError::from_request)?;
        parse_search_page(&html)?.ok_or(ApiError::NotFound)
    }

    /// Detail record for a film id
    pub async fn details(&self, film_id: &str) -> ApiResult<MovieDetails> {
        log_api_request("movie_details", film_id);

        let url = format!(
            "{}/{}",
            self.settings.apis.movie_details_url.trim_end_matches('/'),
            film_id
        );

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.settings.keys.kinopoisk_dev)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response.json::<MovieDetails>().await.map_err(ApiError::from_request)
    }

    /// Premieres for a year and an upper-case English month name
    pub async fn premieres(&self, year: i32, month: &str) -> ApiResult<Vec<PremiereItem>> {
        log_api_request("premieres", month);

        let year = year.to_string();
        let response = self
            .client
            .get(&self.settings.apis.premieres_url)
            .query(&[("year", year.as_str()), ("month", month)])
            .header(API_KEY_HEADER, &self.settings.keys.kinopoisk_unofficial)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let listing: PremieresResponse = response.json().await.map_err(ApiError::from_request)?;
        debug!(items = listing.items.len(), total = ?listing.total, "Premieres listing loaded");
        Ok(listing.items)
    }

    /// Poster image, addressed by film id alone
    pub fn poster_url(&self, film_id: &str) -> ApiResult<Url> {
        let base = self.settings.apis.poster_url.trim_end_matches('/');
        parse_url(&format!("{}/{}.jpg", base, film_id))
    }

    /// Absolute link for a site-relative path such as `/film/301/`
    pub fn site_link(&self, path: &str) -> ApiResult<Url> {
        let base = self.settings.apis.movie_site_url.trim_end_matches('/');
        parse_url(&format!("{}{}", base, path))
    }
}

fn parse_url(value: &str) -> ApiResult<Url> {
    Url::parse(value).map_err(|e| ApiError::Decode(format!("bad url {}: {}", value, e)))
}

fn selector(css: &str) -> ApiResult<Selector> {
    Selector::parse(css).map_err(|e| ApiError::Decode(format!("invalid selector {}: {:?}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract the first search hit
///
/// `Ok(None)` means the page has no results; a result block missing its
/// title link, year or subtitle is a [`ApiError::Decode`].
pub fn parse_search_page(html: &str) -> ApiResult<Option<SearchHit>> {
    let document = Html::parse_document(html);

    let Some(element) = document.select(&selector(".search_results .element")?).next() else {
        return Ok(None);
    };

    let link = element
        .select(&selector(".info .name a")?)
        .next()
        .ok_or_else(|| ApiError::Decode("search result without title link".to_string()))?;
    let year = element
        .select(&selector(".info .name .year")?)
        .next()
        .ok_or_else(|| ApiError::Decode("search result without year".to_string()))?;
    let subtitle = element
        .select(&selector(".info .gray")?)
        .next()
        .ok_or_else(|| ApiError::Decode("search result without subtitle".to_string()))?;
    let rating = element
        .select(&selector(".rating")?)
        .next()
        .map(element_text)
        .filter(|r| !r.is_empty());

    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| ApiError::Decode("title link without href".to_string()))?
        .to_string();

    // "/film/301/" -> "301"
    let film_id = href
        .split('/')
        .nth(2)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Decode(format!("no film id in {}", href)))?
        .to_string();

    Ok(Some(SearchHit {
        title: element_text(link),
        year: element_text(year),
        rating,
        subtitle: element_text(subtitle),
        href,
        film_id,
    }))
}
