//! Shared constants used across the application.

/// Base URL of the byte website.
pub const DEFAULT_BASE_URL: &str = "https://byte.co";

/// Default timeout for outbound page requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent string used for outbound page requests.
///
/// A regular desktop browser user agent, so profile pages are served the same
/// markup a visitor would see.
pub const SCRAPER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
