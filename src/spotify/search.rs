use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Config,
    management::ArtistGenreCache,
    types::{SearchResponse, SearchTrack, TrackRecord, YearMonth},
    utils, warning,
};

use super::{ApiError, SEARCH_PAGE_LIMIT, api_get, artists::get_artist_genres_with, send_checked};

/// Retrieves one page of the monthly track search.
///
/// Requests `GET {base_url}/search` with `q=year:{year} month:{month}`,
/// `type=track`, `limit=50` and the given `offset`.
///
/// # Returns
///
/// - `Ok(Vec<Value>)` - The raw `tracks.items` of the page; empty when the
///   response has none. Items are read one by one with [`parse_search_track`]
/// - `Err(ApiError)` - Network error, non-success status or unreadable body
pub async fn fetch_search_page(
    client: &Client,
    base_url: &str,
    token: &str,
    month: YearMonth,
    offset: u32,
) -> Result<Vec<Value>, ApiError> {
    let api_url = format!("{uri}/search", uri = base_url);
    let request = api_get(client, &api_url, token).query(&[
        ("q", month.query()),
        ("type", "track".to_string()),
        ("limit", SEARCH_PAGE_LIMIT.to_string()),
        ("offset", offset.to_string()),
    ]);

    let body = send_checked(request).await?;
    let res: SearchResponse =
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    Ok(res.tracks.map(|t| t.items).unwrap_or_default())
}

/// Reads one search item; `null` or items missing required fields are errors.
pub fn parse_search_track(item: Value) -> Result<SearchTrack, ApiError> {
    serde_json::from_value(item).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Collects every track the search endpoint returns for a month.
///
/// Pages through the search with offsets 0, 50, 100, ... and stops at the
/// first empty page. The first failing page also ends the search: a warning
/// is printed and the tracks gathered so far are returned without a retry.
/// An unreadable item only skips that item; paging continues.
///
/// Each track gets its own genre resolution, in page order, while a progress
/// bar follows the page.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the run
/// * `config` - Supplies the API base URL
/// * `month` - Year and month to search for
/// * `token` - Bearer token
/// * `cache` - Artist genre memo shared across the run
///
/// # Returns
///
/// The track records of the month in search order. May be empty, e.g. when
/// the very first page fails.
pub async fn search_tracks(
    client: &Client,
    config: &Config,
    month: YearMonth,
    token: &str,
    cache: &mut ArtistGenreCache,
) -> Vec<TrackRecord> {
    let mut offset = 0;
    let mut all_tracks = Vec::new();

    loop {
        let tracks = match fetch_search_page(client, &config.base_url, token, month, offset).await
        {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Error fetching tracks: {}", e);
                break;
            }
        };

        if tracks.is_empty() {
            break;
        }

        let pb = ProgressBar::new(tracks.len() as u64);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}",
        ) {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏").progress_chars("=> "));
        }
        pb.set_message(format!("Resolving genres (offset {})", offset));

        for item in tracks {
            let track = match parse_search_track(item) {
                Ok(track) => track,
                Err(e) => {
                    pb.suspend(|| warning!("Skipping search result: {}", e));
                    pb.inc(1);
                    continue;
                }
            };

            let artist_ids = utils::artist_ids(&track.artists);
            let genres = get_artist_genres_with(
                client,
                &artist_ids,
                token,
                &config.base_url,
                cache,
                |_, e| pb.suspend(|| warning!("Error fetching artist data: {}", e)),
            )
            .await;

            all_tracks.push(TrackRecord {
                id: track.id,
                popularity: track.popularity,
                artists: utils::join_artist_names(&track.artists),
                genres,
                year: month.year,
                month: month.month,
            });
            pb.inc(1);
        }

        pb.finish_and_clear();
        offset += SEARCH_PAGE_LIMIT;
    }

    all_tracks
}
