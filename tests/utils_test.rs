use std::collections::HashSet;

use serde_json::{Map, Value, json};
use trackcsv::cli::ExportOptions;
use trackcsv::types::{FeatureRecord, TrackArtist, TrackRecord, YearMonth};
use trackcsv::utils::*;

// Helper function to create a test track record
fn create_test_track(id: &str, year: i32, month: u32) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        popularity: 42,
        artists: "Artist A, Artist B".to_string(),
        genres: vec!["pop".to_string(), "rock".to_string()],
        year,
        month,
    }
}

// Helper function to build a feature mapping from a json object
fn features(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("features must be an object"),
    }
}

fn artist(id: Option<&str>, name: &str) -> TrackArtist {
    TrackArtist {
        id: id.map(|s| s.to_string()),
        name: name.to_string(),
    }
}

#[test]
fn test_parse_year_month() {
    assert_eq!(parse_year_month("2023-05").unwrap(), YearMonth::new(2023, 5));
    assert_eq!(parse_year_month(" 2022-12 ").unwrap(), YearMonth::new(2022, 12));

    // Month out of range and garbage input are rejected
    assert!(parse_year_month("2023-13").is_err());
    assert!(parse_year_month("2023").is_err());
    assert!(parse_year_month("may 2023").is_err());
}

#[test]
fn test_default_month_range() {
    let months = month_range(DEFAULT_FROM, DEFAULT_TO).unwrap();

    // 2022 through 2024, every month
    assert_eq!(months.len(), 36);
    assert_eq!(months[0], YearMonth::new(2022, 1));
    assert_eq!(months[11], YearMonth::new(2022, 12));
    assert_eq!(months[12], YearMonth::new(2023, 1));
    assert_eq!(months[35], YearMonth::new(2024, 12));
}

#[test]
fn test_export_options_use_default_month_range() {
    let options = ExportOptions::default();
    assert_eq!(options.months, month_range(DEFAULT_FROM, DEFAULT_TO).unwrap());
    assert!(options.cache_artists);
    assert!(!options.include_genres);
}

#[test]
fn test_month_range_bounds() {
    // Single month range
    let single = month_range(YearMonth::new(2024, 3), YearMonth::new(2024, 3)).unwrap();
    assert_eq!(single, vec![YearMonth::new(2024, 3)]);

    // Across a year boundary
    let wrap = month_range(YearMonth::new(2023, 11), YearMonth::new(2024, 2)).unwrap();
    assert_eq!(
        wrap,
        vec![
            YearMonth::new(2023, 11),
            YearMonth::new(2023, 12),
            YearMonth::new(2024, 1),
            YearMonth::new(2024, 2),
        ]
    );

    // Reversed range is an error
    assert!(month_range(YearMonth::new(2024, 2), YearMonth::new(2023, 2)).is_err());
}

#[test]
fn test_year_month_query_and_display() {
    let month = YearMonth::new(2023, 5);
    assert_eq!(month.query(), "year:2023 month:5");
    assert_eq!(month.to_string(), "5/2023");
    assert_eq!(YearMonth::new(2023, 12).next(), YearMonth::new(2024, 1));
}

#[test]
fn test_join_artist_names() {
    let artists = vec![artist(Some("a1"), "Artist A"), artist(None, "Artist B")];
    assert_eq!(join_artist_names(&artists), "Artist A, Artist B");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_artist_ids_skip_missing() {
    let artists = vec![
        artist(Some("a1"), "Artist A"),
        artist(None, "Local File"),
        artist(Some("a2"), "Artist B"),
    ];
    assert_eq!(artist_ids(&artists), vec!["a1", "a2"]);
}

#[test]
fn test_union_genres_has_no_duplicates() {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    union_genres(&mut seen, &mut out, &["pop".to_string(), "rock".to_string()]);
    union_genres(&mut seen, &mut out, &["rock".to_string(), "jazz".to_string()]);

    assert_eq!(out, vec!["pop", "rock", "jazz"]);
}

#[test]
fn test_feature_record_track_fields_take_precedence() {
    let track = create_test_track("t1", 2023, 5);
    let raw = features(json!({
        "id": "t1",
        "danceability": 0.7,
        "popularity": 1,
        "artists": "someone else",
        "year": 1999,
        "month": 12
    }));

    let record = FeatureRecord::merge(raw, &track);

    assert_eq!(record.get("danceability"), Some(&json!(0.7)));
    assert_eq!(record.get("popularity"), Some(&json!(42)));
    assert_eq!(record.get("artists"), Some(&json!("Artist A, Artist B")));
    assert_eq!(record.get("year"), Some(&json!(2023)));
    assert_eq!(record.get("month"), Some(&json!(5)));

    // Overwritten keys keep their position
    let keys: Vec<&String> = record.keys().collect();
    assert_eq!(
        keys,
        vec!["id", "danceability", "popularity", "artists", "year", "month"]
    );
}

#[test]
fn test_feature_record_keeps_track_id() {
    let track = create_test_track("t9", 2024, 1);

    // Missing id is filled from the track
    let record = FeatureRecord::merge(features(json!({"energy": 0.3})), &track);
    assert_eq!(record.get("id"), Some(&json!("t9")));

    // Existing id is left alone
    let record = FeatureRecord::merge(features(json!({"id": "t9", "energy": 0.3})), &track);
    assert_eq!(record.get("id"), Some(&json!("t9")));
    assert_eq!(record.keys().next().unwrap(), "id");
}

#[test]
fn test_feature_record_with_genres() {
    let track = create_test_track("t1", 2023, 5);
    let record =
        FeatureRecord::merge(features(json!({"id": "t1"})), &track).with_genres(&track.genres);

    assert_eq!(record.get("genres"), Some(&json!("pop|rock")));
}
