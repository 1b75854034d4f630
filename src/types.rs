use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Search filter understood by the `/search` endpoint.
    pub fn query(&self) -> String {
        format!("year:{} month:{}", self.year, self.month)
    }

    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TracksPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TracksPage {
    /// Kept untyped so one unreadable item does not discard the page.
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrack {
    pub id: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A searched track enriched with the genres of its artists.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub id: String,
    pub popularity: u32,
    /// Artist display names joined with `", "`.
    pub artists: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub month: u32,
}

/// One output row: the audio feature object of a track merged with the
/// track fields that describe where it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord(Map<String, Value>);

impl FeatureRecord {
    /// Merges `popularity`, `artists`, `year` and `month` of `track` into
    /// `features`. Track values replace feature values with the same key.
    pub fn merge(mut features: Map<String, Value>, track: &TrackRecord) -> Self {
        features
            .entry("id")
            .or_insert_with(|| Value::String(track.id.clone()));
        features.insert("popularity".to_string(), Value::from(track.popularity));
        features.insert("artists".to_string(), Value::from(track.artists.clone()));
        features.insert("year".to_string(), Value::from(track.year));
        features.insert("month".to_string(), Value::from(track.month));
        Self(features)
    }

    pub fn with_genres(mut self, genres: &[String]) -> Self {
        self.0
            .insert("genres".to_string(), Value::from(genres.join("|")));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<Map<String, Value>> for FeatureRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Tabled)]
pub struct MonthSummaryRow {
    pub month: String,
    pub tracks: usize,
    pub rows: usize,
}
