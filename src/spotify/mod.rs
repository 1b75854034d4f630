//! # Spotify Integration Module
//!
//! This module is the HTTP layer between the export and the Spotify Web API.
//! Every function takes the shared [`reqwest::Client`], the bearer token and
//! the API base URL as parameters, issues its requests one at a time and
//! returns plain Rust data.
//!
//! ## Architecture
//!
//! ```text
//! Export Orchestration (cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Track Search (offset pagination)
//!     ├── Artist Genres
//!     └── Audio Features
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials grant
//! - `GET /search` - monthly track search, 50 tracks per page
//! - `GET /artists/{id}` - artist genres
//! - `GET /audio-features/{id}` - audio feature vector of a track
//!
//! ## Error Handling
//!
//! Nothing here retries. Failures are reported as [`ApiError`] and the
//! callers decide whether to skip (artists, tracks) or stop (search pages).

use std::fmt;

use reqwest::{Client, RequestBuilder, StatusCode, header::CONTENT_TYPE};

pub mod artists;
pub mod auth;
pub mod features;
pub mod search;

/// Page size of the track search.
pub const SEARCH_PAGE_LIMIT: u32 = 50;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status(StatusCode, String),
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "{}", e),
            ApiError::Status(status, body) => write!(f, "{} - {}", status.as_u16(), body),
            ApiError::Malformed(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

/// GET request carrying the headers every API call sends.
fn api_get(client: &Client, url: &str, token: &str) -> RequestBuilder {
    client
        .get(url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
}

/// Sends `request` and returns the body text of a successful response.
async fn send_checked(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status(status, body));
    }

    Ok(body)
}
