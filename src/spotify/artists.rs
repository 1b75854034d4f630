use std::collections::HashSet;

use reqwest::Client;

use crate::{management::ArtistGenreCache, types::ArtistResponse, utils, warning};

use super::{ApiError, api_get, send_checked};

/// Retrieves the genre tags of a single artist.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the run
/// * `artist_id` - Spotify ID of the artist
/// * `token` - Bearer token from the client credentials exchange
/// * `base_url` - Root of the Web API, e.g. `https://api.spotify.com/v1`
///
/// # Returns
///
/// - `Ok(Vec<String>)` - The artist's `genres`, empty when the field is absent
/// - `Err(ApiError)` - Network error, non-success status or unreadable body
pub async fn get_artist_genre_tags(
    client: &Client,
    artist_id: &str,
    token: &str,
    base_url: &str,
) -> Result<Vec<String>, ApiError> {
    let api_url = format!("{uri}/artists/{id}", uri = base_url, id = artist_id);
    let body = send_checked(api_get(client, &api_url, token)).await?;

    let artist: ArtistResponse =
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(artist.genres)
}

/// Resolves the union of genres of a set of artists.
///
/// Issues one artist request per id that is not already memoised in `cache`.
/// An artist whose request fails is reported with a warning and contributes
/// nothing; the remaining artists are still resolved. Failed lookups are not
/// memoised, so a later track referencing the same artist tries again.
///
/// # Returns
///
/// The resolved genres without duplicates, in first-seen order. The order
/// carries no meaning. An empty list means either that no artist has genres
/// or that every lookup failed.
///
/// # Example
///
/// ```
/// let mut cache = ArtistGenreCache::new();
/// let genres = get_artist_genres(&client, &ids, &token, &config.base_url, &mut cache).await;
/// ```
pub async fn get_artist_genres(
    client: &Client,
    artist_ids: &[String],
    token: &str,
    base_url: &str,
    cache: &mut ArtistGenreCache,
) -> Vec<String> {
    get_artist_genres_with(client, artist_ids, token, base_url, cache, |_, e| {
        warning!("Error fetching artist data: {}", e)
    })
    .await
}

/// Same as [`get_artist_genres`], but hands every failed lookup to
/// `on_error` instead of printing it, e.g. to print it around a progress bar.
pub async fn get_artist_genres_with<F>(
    client: &Client,
    artist_ids: &[String],
    token: &str,
    base_url: &str,
    cache: &mut ArtistGenreCache,
    mut on_error: F,
) -> Vec<String>
where
    F: FnMut(&str, &ApiError),
{
    let mut seen = HashSet::new();
    let mut genres = Vec::new();

    for artist_id in artist_ids {
        if let Some(cached) = cache.get(artist_id) {
            utils::union_genres(&mut seen, &mut genres, cached);
            continue;
        }

        match get_artist_genre_tags(client, artist_id, token, base_url).await {
            Ok(tags) => {
                utils::union_genres(&mut seen, &mut genres, &tags);
                cache.insert(artist_id, tags);
            }
            Err(e) => on_error(artist_id, &e),
        }
    }

    genres
}
