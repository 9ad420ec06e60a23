//! # lastfm-export
//!
//! Export a Last.fm user's complete library (artists and albums) to JSON
//! and CSV files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lastfm_export::{export_library, ExportOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ExportOptions {
//!         base_name: "rj_library".to_string(),
//!         ..ExportOptions::new("exports")
//!     };
//!
//!     let result = export_library("your_api_key", "rj", &options)?;
//!     for line in result.summary_lines() {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Low-Level APIs
//!
//! - [`LastFmClient`] - authenticated requests and full library listings
//! - [`Paginator`] - lazy iteration over any paginated list endpoint
//! - [`LibraryExporter`] - the export pipeline on top of an existing client

pub mod api;
pub mod error;
pub mod exporter;
pub mod models;

pub use api::{LastFmClient, PageRequest, Paginator};
pub use error::{ApiError, ApiErrorKind, ExportError, ProtocolError};
pub use exporter::{ExportOptions, LibraryExporter};
pub use models::{AlbumArtist, ExportPayload, ExportResult, Record};

/// Export `username`'s library using a client with default settings.
///
/// API failures come back as [`ExportError::Api`]; file-system failures as
/// [`ExportError::Persistence`].
pub fn export_library(
    api_key: &str,
    username: &str,
    options: &ExportOptions,
) -> Result<ExportResult, ExportError> {
    let client = LastFmClient::new(api_key)?;
    LibraryExporter::new(&client, username).export_library(options)
}
