//! Reply formatting
//!
//! Pure mapping from upstream records to Markdown reply text. Optional
//! upstream fields render a sentinel from the catalogue instead of failing.

use crate::i18n::{I18n, params};
use crate::models::{PremiereItem, SearchHit, WeatherResponse};
use crate::pagination::PageWindow;
use crate::utils::helpers::capitalize;

/// Escape characters that open an entity in Telegram's legacy Markdown
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Text usable inside `[...](...)`
fn link_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '[' => '(',
            ']' => ')',
            other => other,
        })
        .collect()
}

fn number_or(value: Option<f64>, unknown: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| unknown.to_string())
}

pub fn format_weather(i18n: &I18n, lang: &str, city: &str, weather: &WeatherResponse) -> String {
    let unknown = i18n.t("common.unknown", lang, None);
    let description = weather
        .condition()
        .and_then(|c| c.description.as_deref())
        .filter(|d| !d.trim().is_empty())
        .map(capitalize)
        .unwrap_or_else(|| unknown.clone());
    let wind = weather.wind.as_ref();

    i18n.t(
        "commands.weather.report",
        lang,
        Some(&params([
            ("city", escape_markdown(city)),
            ("description", escape_markdown(&description)),
            ("temp", weather.main.temp.to_string()),
            ("feels_like", number_or(weather.main.feels_like, &unknown)),
            ("humidity", number_or(weather.main.humidity, &unknown)),
            ("pressure", number_or(weather.main.pressure, &unknown)),
            ("wind_speed", number_or(wind.and_then(|w| w.speed), &unknown)),
            ("wind_deg", number_or(wind.and_then(|w| w.deg), &unknown)),
        ])),
    )
}

pub fn format_movie_caption(
    i18n: &I18n,
    lang: &str,
    hit: &SearchHit,
    description: &str,
    link: &str,
) -> String {
    let rating = hit
        .rating
        .clone()
        .unwrap_or_else(|| i18n.t("commands.movie.no_rating", lang, None));

    i18n.t(
        "commands.movie.caption",
        lang,
        Some(&params([
            ("title", escape_markdown(&hit.title)),
            ("year", escape_markdown(&hit.year)),
            ("subtitle", escape_markdown(&hit.subtitle)),
            ("rating", escape_markdown(&rating)),
            ("description", escape_markdown(description)),
            ("link", link.to_string()),
        ])),
    )
}

pub fn film_link(site_url: &str, film_id: u64) -> String {
    format!("{}/film/{}/", site_url.trim_end_matches('/'), film_id)
}

pub fn tickets_link(site_url: &str, film_id: u64) -> String {
    format!("{}/film/{}/afisha/city/1/", site_url.trim_end_matches('/'), film_id)
}

/// Header plus one block per item of `window`
pub fn format_premieres_page(
    i18n: &I18n,
    lang: &str,
    site_url: &str,
    items: &[PremiereItem],
    window: &PageWindow,
) -> String {
    let unknown = i18n.t("common.unknown", lang, None);

    let mut text = i18n.t(
        "commands.most_wanted.header",
        lang,
        Some(&params([
            ("page", window.display_page().to_string()),
            ("total", window.total_pages.to_string()),
        ])),
    );

    for item in window.slice(items) {
        text.push_str(&i18n.t(
            "commands.most_wanted.item",
            lang,
            Some(&params([
                ("name", link_text(item.display_name().unwrap_or(&unknown))),
                ("link", film_link(site_url, item.kinopoisk_id)),
                ("year", item.year.map(|y| y.to_string()).unwrap_or_else(|| unknown.clone())),
                ("duration", item.duration.map(|d| d.to_string()).unwrap_or_else(|| "?".to_string())),
                ("premiere", escape_markdown(item.premiere_ru.as_deref().unwrap_or(&unknown))),
                ("tickets", tickets_link(site_url, item.kinopoisk_id)),
            ])),
        ));
    }

    text
}

pub fn format_coordinates(i18n: &I18n, lang: &str, place: &str, lat: &str, lon: &str) -> String {
    i18n.t(
        "commands.map.coordinates",
        lang,
        Some(&params([
            ("place", place.to_string()),
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
        ])),
    )
}

pub fn format_translation(i18n: &I18n, lang: &str, source: &str, translation: &str) -> String {
    i18n.t(
        "commands.translate.result",
        lang,
        Some(&params([
            ("source", source.to_string()),
            ("translation", translation.to_string()),
        ])),
    )
}

pub fn format_affirmation(i18n: &I18n, lang: &str, affirmation: &str, translation: &str) -> String {
    i18n.t(
        "commands.affirmation.result",
        lang,
        Some(&params([
            ("affirmation", affirmation.to_string()),
            ("translation", translation.to_string()),
        ])),
    )
}
