//! Byte Scraper library.
//!
//! Fetches public byte.co profile and post pages, extracts typed records from
//! the HTML, and serves them through a small JSON API.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod client;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod extract;
pub mod transport;
pub mod web;

pub use client::Scraper;
pub use error::{is_status_not_found, FetchError, RequestError, ScrapeError};
pub use extract::{Post, User};
