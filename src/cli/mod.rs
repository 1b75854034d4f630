//! # CLI Module
//!
//! This module holds the user-facing layer of the export: it drives the
//! month-by-month loop over the Spotify integration layer, shows progress
//! while requests run and prints a summary once the table is written.
//!
//! ## Data Flow
//!
//! ```text
//! Credential Exchange (once)
//!     ↓
//! for each month: Track Search → Artist Genres (per track)
//!     ↓
//! Audio Features (per track)
//!     ↓
//! Table Sink (persisted after every month)
//! ```
//!
//! ## Error Handling
//!
//! - A failing artist lookup only drops that artist's genres
//! - A failing search page ends that month, the export continues
//! - A failing feature request drops that track's row
//! - Token and output failures end the export

mod export;

pub use export::DEFAULT_OUTPUT;
pub use export::ExportOptions;
pub use export::export;
pub use export::run_export;
