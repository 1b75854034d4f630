use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::types::{TrackArtist, YearMonth};

pub const DEFAULT_FROM: YearMonth = YearMonth {
    year: 2022,
    month: 1,
};
pub const DEFAULT_TO: YearMonth = YearMonth {
    year: 2024,
    month: 12,
};

/// Parses a `YYYY-MM` string into a [`YearMonth`].
pub fn parse_year_month(value: &str) -> Result<YearMonth, String> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month '{}', expected YYYY-MM", value))?;
    Ok(YearMonth::new(date.year(), date.month()))
}

/// Every month from `from` to `to`, both inclusive.
pub fn month_range(from: YearMonth, to: YearMonth) -> Result<Vec<YearMonth>, String> {
    if from > to {
        return Err(format!("Range start {} is after range end {}", from, to));
    }

    let mut months = Vec::new();
    let mut current = from;
    while current <= to {
        months.push(current);
        current = current.next();
    }
    Ok(months)
}

pub fn join_artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn artist_ids(artists: &[TrackArtist]) -> Vec<String> {
    artists.iter().filter_map(|a| a.id.clone()).collect()
}

/// Adds `genres` to `seen`/`out`, keeping the first occurrence of each genre.
pub fn union_genres(seen: &mut HashSet<String>, out: &mut Vec<String>, genres: &[String]) {
    for genre in genres {
        if seen.insert(genre.clone()) {
            out.push(genre.clone());
        }
    }
}
