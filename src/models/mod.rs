//! Data models for Last.fm library records and export output.
//!
//! Records stay loosely typed; only the CSV projections and the album
//! artist reference get real types.

pub mod album;
pub mod artist;
pub mod common;
pub mod export;

// Re-exports for convenience
pub use album::{AlbumArtist, AlbumRow, ALBUM_COLUMNS};
pub use artist::{ArtistRow, ARTIST_COLUMNS};
pub use common::{get_text, value_text, Record};
pub use export::{ExportPayload, ExportResult};
