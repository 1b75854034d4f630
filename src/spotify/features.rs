use reqwest::Client;
use serde_json::Value;

use crate::types::{FeatureRecord, TrackRecord};

use super::{ApiError, api_get, send_checked};

/// Fetches the audio features of a track and merges the track's metadata
/// into them.
///
/// The response status is checked before the body is read. Anything other
/// than a successful JSON object is an error, which the export turns into a
/// skipped row instead of an aborted run.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the run
/// * `track` - Track whose `id` selects the features and whose `popularity`,
///   `artists`, `year` and `month` are merged in
/// * `token` - Bearer token
/// * `base_url` - Root of the Web API
///
/// # Returns
///
/// - `Ok(FeatureRecord)` - Feature fields plus track fields; the track fields
///   win over feature fields with the same name
/// - `Err(ApiError)` - Network error, non-success status or a body that is
///   not a JSON object
pub async fn get_track_features(
    client: &Client,
    track: &TrackRecord,
    token: &str,
    base_url: &str,
) -> Result<FeatureRecord, ApiError> {
    let api_url = format!("{uri}/audio-features/{id}", uri = base_url, id = track.id);
    let body = send_checked(api_get(client, &api_url, token)).await?;

    match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(features)) => Ok(FeatureRecord::merge(features, track)),
        Ok(other) => Err(ApiError::Malformed(format!(
            "audio features of {} are not an object: {}",
            track.id, other
        ))),
        Err(e) => Err(ApiError::Malformed(e.to_string())),
    }
}
