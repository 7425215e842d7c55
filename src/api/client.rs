//! HTTP implementation of `CardSource`

use super::error::{ApiError, Result};
use super::{CardSource, ListingResponse, SearchResponse};
use crate::config::ApiConfig;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Card source backed by the remote catalog REST endpoint
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: Client,
    base_url: Url,
}

impl HttpCardSource {
    /// Build a client for the configured endpoint
    ///
    /// Every request carries `Accept: */*` and the configured client
    /// identifier as `User-Agent`. A `timeout_secs` of 0 disables the timeout.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidUrl` for an unparsable base URL, or
    /// `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.client_id.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// URL for one listing page
    #[must_use]
    pub fn listing_url(&self, page: u32, page_size: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());
        url
    }

    /// URL for a name search (`q=name:"<term>"`)
    #[must_use]
    pub fn search_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("name:\"{term}\""));
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CardSource for HttpCardSource {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<ListingResponse> {
        self.get_json(self.listing_url(page, page_size))
    }

    fn search_by_name(&self, term: &str) -> Result<SearchResponse> {
        self.get_json(self.search_url(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpCardSource {
        HttpCardSource::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn test_listing_url() {
        let url = source().listing_url(3, 12);
        assert_eq!(
            url.as_str(),
            "https://api.pokemontcg.io/v2/cards?page=3&pageSize=12"
        );
    }

    #[test]
    fn test_search_url_encodes_quoted_name() {
        let url = source().search_url("pik");
        assert_eq!(
            url.as_str(),
            "https://api.pokemontcg.io/v2/cards?q=name%3A%22pik%22"
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("q".to_string(), "name:\"pik\"".to_string())]);
    }

    #[test]
    fn test_search_url_with_spaces() {
        let url = source().search_url("mr mime");
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, "name:\"mr mime\"");
    }

    #[test]
    fn test_base_url_query_is_preserved() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/cards?locale=en".to_string(),
            ..ApiConfig::default()
        };
        let url = HttpCardSource::new(&config).unwrap().listing_url(1, 12);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/cards?locale=en&page=1&pageSize=12"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let err = HttpCardSource::new(&config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
