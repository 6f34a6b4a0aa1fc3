//! Outbound URLs: map embeds and the web-search link-out.
//!
//! The map provider does all rendering; this module only builds the
//! `(latitude, longitude, zoom, render mode)` request it consumes.
use anyhow::{Context, Result};
use reqwest::Url;

use crate::catalog::{GeoFocus, Landmark};
use crate::config::{MapConfig, WebSearchConfig};

/// Parameters for one embedded map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEmbed {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub render_mode: String,
    pub language: String,
}

impl MapEmbed {
    /// View centred on a point's geographic focus.
    #[must_use]
    pub fn for_focus(focus: &GeoFocus, config: &MapConfig) -> Self {
        Self {
            latitude: focus.lat,
            longitude: focus.lng,
            zoom: focus.zoom.unwrap_or(config.default_zoom),
            render_mode: config.render_mode.clone(),
            language: config.language.clone(),
        }
    }

    /// Close-up view of a landmark.
    #[must_use]
    pub fn for_landmark(landmark: &Landmark, config: &MapConfig) -> Self {
        Self {
            latitude: landmark.lat,
            longitude: landmark.lng,
            zoom: config.landmark_zoom,
            render_mode: config.render_mode.clone(),
            language: config.language.clone(),
        }
    }

    /// Embed URL understood by the map provider.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let q = format!("{},{}", self.latitude, self.longitude);
        let z = self.zoom.to_string();
        Url::parse_with_params(
            base_url,
            &[
                ("q", q.as_str()),
                ("z", z.as_str()),
                ("t", self.render_mode.as_str()),
                ("output", "embed"),
                ("hl", self.language.as_str()),
            ],
        )
        .with_context(|| format!("invalid map base URL: {base_url}"))
    }
}

/// Link-out URL for a free web search. A blank query searches the default phrase.
pub fn web_search_url(query: &str, config: &WebSearchConfig) -> Result<Url> {
    let query = query.trim();
    let q = if query.is_empty() {
        config.default_phrase.as_str()
    } else {
        query
    };
    Url::parse_with_params(&config.base_url, &[("q", q)])
        .with_context(|| format!("invalid web search base URL: {}", config.base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RiskLevel;

    fn focus(zoom: Option<u8>) -> GeoFocus {
        GeoFocus {
            region_name: "توفالو".to_string(),
            lat: -8.5211,
            lng: 179.1983,
            zoom,
            risk_level: RiskLevel::Critical,
            narrative: String::new(),
            focus_color: None,
            kind: Default::default(),
            detailed_impacts: Vec::new(),
            landmarks: Vec::new(),
        }
    }

    fn param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_focus_default_zoom() {
        let config = MapConfig::default();
        let embed = MapEmbed::for_focus(&focus(None), &config);
        assert_eq!(embed.zoom, 6);

        let url = embed.url(&config.base_url).unwrap();
        assert_eq!(url.host_str(), Some("maps.google.com"));
        assert_eq!(param(&url, "q").as_deref(), Some("-8.5211,179.1983"));
        assert_eq!(param(&url, "z").as_deref(), Some("6"));
        assert_eq!(param(&url, "t").as_deref(), Some("k"));
        assert_eq!(param(&url, "output").as_deref(), Some("embed"));
        assert_eq!(param(&url, "hl").as_deref(), Some("ar"));
    }

    #[test]
    fn test_focus_explicit_zoom() {
        let embed = MapEmbed::for_focus(&focus(Some(9)), &MapConfig::default());
        assert_eq!(embed.zoom, 9);
    }

    #[test]
    fn test_landmark_zoom() {
        let landmark = Landmark {
            name: "فونافوتي".to_string(),
            lat: -8.52,
            lng: 179.2,
            description: String::new(),
        };
        let embed = MapEmbed::for_landmark(&landmark, &MapConfig::default());
        assert_eq!(embed.zoom, 15);
        assert_eq!(embed.latitude, -8.52);
    }

    #[test]
    fn test_web_search_query_encoded() {
        let url = web_search_url("سد النهضة", &WebSearchConfig::default()).unwrap();
        assert!(url.as_str().starts_with("https://www.google.com/search?q="));
        assert_eq!(param(&url, "q").as_deref(), Some("سد النهضة"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_web_search_blank_uses_default_phrase() {
        let url = web_search_url("   ", &WebSearchConfig::default()).unwrap();
        assert_eq!(param(&url, "q").as_deref(), Some("العدالة المناخية"));
    }

    #[test]
    fn test_bad_base_url() {
        let config = WebSearchConfig {
            base_url: "not a url".to_string(),
            default_phrase: "x".to_string(),
        };
        assert!(web_search_url("q", &config).is_err());
    }
}
