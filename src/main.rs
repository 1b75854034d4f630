use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use trackcsv::{cli, config, error, types::YearMonth, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// First month to export (YYYY-MM), start of the default range if omitted
    #[clap(long, value_parser = utils::parse_year_month)]
    from: Option<YearMonth>,

    /// Last month to export, inclusive (YYYY-MM), end of the default range if omitted
    #[clap(long, value_parser = utils::parse_year_month)]
    to: Option<YearMonth>,

    /// CSV file to write, overwritten after every month
    #[clap(long, default_value = cli::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Add a `genres` column with the resolved artist genres
    #[clap(long)]
    include_genres: bool,

    /// Look up every artist again instead of reusing genres within the run
    #[clap(long)]
    no_artist_cache: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let from = cli.from.unwrap_or(utils::DEFAULT_FROM);
    let to = cli.to.unwrap_or(utils::DEFAULT_TO);
    let months = match utils::month_range(from, to) {
        Ok(months) => months,
        Err(e) => error!("{}", e),
    };

    let options = cli::ExportOptions {
        months,
        output: cli.output,
        include_genres: cli.include_genres,
        cache_artists: !cli.no_artist_cache,
    };

    cli::export(&config, &options).await;
}
