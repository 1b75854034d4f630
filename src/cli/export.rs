use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;

use crate::{
    Res,
    config::Config,
    error, info,
    management::{ArtistGenreCache, TableSink},
    spotify::{auth::get_access_token, features::get_track_features, search::search_tracks},
    success,
    types::{FeatureRecord, MonthSummaryRow, TrackRecord, YearMonth},
    utils, warning,
};

pub const DEFAULT_OUTPUT: &str = "tracks_by_month.csv";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub months: Vec<YearMonth>,
    pub output: PathBuf,
    pub include_genres: bool,
    pub cache_artists: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            months: utils::month_range(utils::DEFAULT_FROM, utils::DEFAULT_TO)
                .unwrap_or_default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_genres: false,
            cache_artists: true,
        }
    }
}

/// Runs the export and prints a per-month summary table.
///
/// Exits the program when the export cannot continue, i.e. when no token
/// could be requested or the output file cannot be written.
pub async fn export(config: &Config, options: &ExportOptions) {
    match run_export(config, options).await {
        Ok(summary) => {
            let rows: usize = summary.iter().map(|s| s.rows).sum();
            println!("{}", Table::new(summary));
            success!(
                "Wrote {rows} rows to {path}",
                rows = rows,
                path = options.output.display()
            );
        }
        Err(e) => error!("Export failed: {}", e),
    }
}

/// Exports every month of `options.months` into the output table.
///
/// Requests a single bearer token, then for each month searches the tracks,
/// fetches their audio features and persists the table before moving on.
/// Tracks whose features cannot be fetched are skipped with a warning. A
/// month whose search fails yields no rows but does not stop the export.
///
/// # Returns
///
/// - `Ok(Vec<MonthSummaryRow>)` - Track and row counts per month
/// - `Err` - The token request failed or the output could not be written
pub async fn run_export(config: &Config, options: &ExportOptions) -> Res<Vec<MonthSummaryRow>> {
    let client = Client::new();
    let token = get_access_token(&client, config).await?;

    let mut cache = if options.cache_artists {
        ArtistGenreCache::new()
    } else {
        ArtistGenreCache::disabled()
    };
    let mut sink = TableSink::new(options.output.clone());
    let mut summary = Vec::with_capacity(options.months.len());

    for month in &options.months {
        info!("Getting tracks for {}", month);
        let tracks = search_tracks(&client, config, *month, &token, &mut cache).await;
        let records =
            fetch_features(&client, config, &tracks, &token, options.include_genres).await;

        summary.push(MonthSummaryRow {
            month: month.to_string(),
            tracks: tracks.len(),
            rows: records.len(),
        });

        sink.extend(records).persist().await?;
    }

    // the file exists even when the range is empty
    if options.months.is_empty() {
        sink.persist().await?;
    }

    Ok(summary)
}

async fn fetch_features(
    client: &Client,
    config: &Config,
    tracks: &[TrackRecord],
    token: &str,
    include_genres: bool,
) -> Vec<FeatureRecord> {
    let pb = ProgressBar::new(tracks.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}")
    {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏").progress_chars("=> "));
    }
    pb.set_message("Fetching audio features");

    let mut records = Vec::with_capacity(tracks.len());
    for track in tracks {
        match get_track_features(client, track, token, &config.base_url).await {
            Ok(features) => {
                let features = if include_genres {
                    features.with_genres(&track.genres)
                } else {
                    features
                };
                records.push(features);
            }
            Err(e) => {
                pb.suspend(|| warning!("Skipping audio features of {}: {}", track.id, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    records
}
