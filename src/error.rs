//! Error types for fetching and extracting byte.co pages.
//!
//! Failures fall into three kinds: the site answered with a non-200 status
//! ([`RequestError`]), the request never completed (transport), or the body
//! could not be read as a document. [`is_status_not_found`] lets callers tell
//! "entity does not exist" apart from everything else without looking at
//! message strings.

use std::error::Error as StdError;

use thiserror::Error;

/// The site responded with a status other than 200 OK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    /// Numeric HTTP status code of the response.
    pub status_code: u16,
    /// Human readable message embedding the original status line.
    pub message: String,
}

impl RequestError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

/// Failure of a single page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] RequestError),
    /// DNS, connection, TLS or timeout failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unable to read response")]
    Body(#[source] reqwest::Error),
    #[error("unable to read response: body is not valid UTF-8")]
    Decode(#[source] std::str::Utf8Error),
}

/// Error returned by the scraper facade, carrying call-site context.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unable to get user {username}")]
    User {
        username: String,
        #[source]
        source: FetchError,
    },
    #[error("unable to get byte {id}")]
    Post {
        id: String,
        #[source]
        source: FetchError,
    },
    #[error("unable to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ScrapeError {
    /// Whether the upstream reported the requested entity as missing (HTTP 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        is_status_not_found(self)
    }

    /// Status code of the upstream rejection, if that is what caused this error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        find_request_error(self).map(|e| e.status_code)
    }
}

/// Check whether `err`, or anything in its source chain, is a
/// [`RequestError`] with status 404.
///
/// Works on wrapped errors too, including `anyhow::Error` via `as_ref()`.
#[must_use]
pub fn is_status_not_found(err: &(dyn StdError + 'static)) -> bool {
    find_request_error(err).is_some_and(RequestError::is_not_found)
}

/// Walk the source chain looking for the first [`RequestError`].
#[must_use]
pub fn find_request_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a RequestError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(request_error) = e.downcast_ref::<RequestError>() {
            return Some(request_error);
        }
        // `FetchError::Request` is transparent, so the inner error never shows up
        // as a separate link in the chain.
        if let Some(FetchError::Request(request_error)) = e.downcast_ref::<FetchError>() {
            return Some(request_error);
        }
        current = e.source();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error(status_code: u16) -> RequestError {
        RequestError {
            status_code,
            message: format!("https://byte.co/@x responded with HTTP status: {status_code}"),
        }
    }

    #[test]
    fn test_not_found_through_wrapping() {
        let err = ScrapeError::User {
            username: "ghost".to_string(),
            source: FetchError::Request(request_error(404)),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "unable to get user ghost");
    }

    #[test]
    fn test_other_status_is_not_not_found() {
        let err = ScrapeError::Post {
            id: "abc".to_string(),
            source: FetchError::Request(request_error(500)),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_decode_error_is_not_request_error() {
        let bytes = [0xff_u8, 0xfe];
        let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
        let err = ScrapeError::User {
            username: "alice".to_string(),
            source: FetchError::Decode(utf8_err),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_bare_request_error() {
        let err = request_error(404);
        assert!(is_status_not_found(&err));
    }

    #[test]
    fn test_through_anyhow_context() {
        let err = anyhow::Error::new(ScrapeError::User {
            username: "ghost".to_string(),
            source: FetchError::Request(request_error(404)),
        })
        .context("lookup failed");
        assert!(is_status_not_found(err.as_ref()));
    }
}
