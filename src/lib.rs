//! Monthly Spotify Track Export Library
//!
//! This library provides the building blocks of a batch export job: it
//! authenticates against the Spotify Web API with the client credentials flow,
//! searches tracks month by month, enriches them with artist genres and audio
//! features, and writes the aggregated rows to a CSV table.
//!
//! # Modules
//!
//! - `cli` - Export orchestration, progress output and run summary
//! - `config` - Configuration management and environment variables
//! - `management` - Artist genre memo and the CSV output sink
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Month range and formatting helpers
//!
//! # Example
//!
//! ```
//! use trackcsv::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> trackcsv::Res<()> {
//!     config::load_env()?;
//!     let config = config::Config::from_env()?;
//!     cli::run_export(&config, &cli::ExportOptions::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use trackcsv::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates, such as announcing the
/// month currently being exported.
///
/// # Example
///
/// ```
/// info!("Getting tracks for {}", month);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} rows", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only used
/// by the binary for errors the export cannot continue from, such as missing
/// credentials.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures: a skipped artist, an abandoned search
/// month or a track whose audio features could not be read.
///
/// # Example
///
/// ```
/// warning!("Error fetching artist data: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
