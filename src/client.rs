use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, SCRAPER_USER_AGENT};
use crate::document::Document;
use crate::error::ScrapeError;
use crate::extract::{extract_post, extract_user, Post, User};
use crate::transport::Transport;

/// Scraper for byte.co profiles and posts.
///
/// Each call is an independent fetch, parse and extract; nothing is cached or
/// retried. The scraper is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct Scraper {
    transport: Transport,
    base_url: String,
}

impl Scraper {
    /// Create a scraper for `base_url` with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScrapeError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Create a scraper for `base_url` with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ScrapeError> {
        let transport =
            Transport::new(timeout, SCRAPER_USER_AGENT).map_err(ScrapeError::Client)?;
        Ok(Self::from_transport(transport, base_url))
    }

    /// Create a scraper that sends requests through `client`.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self::from_transport(Transport::from_client(client), base_url)
    }

    /// Create a scraper from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let transport = Transport::new(config.request_timeout, &config.user_agent)
            .map_err(ScrapeError::Client)?;
        Ok(Self::from_transport(transport, config.base_url.clone()))
    }

    fn from_transport(transport: Transport, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    /// Base URL all page URLs are built from, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical profile URL for `username`.
    #[must_use]
    pub fn user_url(&self, username: &str) -> String {
        format!("{}/@{username}", self.base_url)
    }

    /// Canonical post URL for `id`.
    #[must_use]
    pub fn post_url(&self, id: &str) -> String {
        format!("{}/p/{id}", self.base_url)
    }

    /// Fetch and extract the profile of `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::User`] wrapping the fetch failure. Use
    /// [`ScrapeError::is_not_found`] to detect a missing user.
    pub async fn get_user(&self, username: &str) -> Result<User, ScrapeError> {
        let url = self.user_url(username);

        let body = self
            .transport
            .fetch(&url)
            .await
            .map_err(|source| ScrapeError::User {
                username: username.to_string(),
                source,
            })?;

        let document = Document::parse(&body);
        let user = extract_user(&document, &url, &self.base_url);

        debug!(
            username = %user.username,
            posts = user.recent_post_urls.len(),
            "Extracted user"
        );

        Ok(user)
    }

    /// Fetch and extract the byte with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Post`] wrapping the fetch failure. Use
    /// [`ScrapeError::is_not_found`] to detect a missing byte.
    pub async fn get_post(&self, id: &str) -> Result<Post, ScrapeError> {
        let url = self.post_url(id);

        let body = self
            .transport
            .fetch(&url)
            .await
            .map_err(|source| ScrapeError::Post {
                id: id.to_string(),
                source,
            })?;

        let document = Document::parse(&body);
        let post = extract_post(&document, id, &url, &self.base_url);

        debug!(id = %post.id, author = %post.author_username, "Extracted byte");

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let scraper = Scraper::with_client(Client::new(), "https://byte.co/");

        assert_eq!(scraper.base_url(), "https://byte.co");
        assert_eq!(scraper.user_url("alice"), "https://byte.co/@alice");
        assert_eq!(scraper.post_url("abc"), "https://byte.co/p/abc");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = Config {
            base_url: "http://127.0.0.1:4000".to_string(),
            ..Config::for_testing()
        };
        let scraper = Scraper::from_config(&config).unwrap();

        assert_eq!(scraper.user_url("bob"), "http://127.0.0.1:4000/@bob");
    }
}
