use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{FetchError, RequestError};

/// HTTP transport used to fetch pages.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares one connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Transport {
    /// Create a transport with a client-level request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one configured for tests.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Send a GET request to `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] on any status other than 200,
    /// [`FetchError::Transport`] if the request could not be completed, and
    /// [`FetchError::Body`]/[`FetchError::Decode`] if the body could not be read
    /// as UTF-8 text.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "Fetching page");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "Upstream responded with non-200 status");
            return Err(RequestError {
                status_code: status.as_u16(),
                message: format!("{url} responded with HTTP status: {status}"),
            }
            .into());
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let text = std::str::from_utf8(&body).map_err(FetchError::Decode)?;

        Ok(text.to_owned())
    }
}
