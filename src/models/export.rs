//! The combined export document and the summary handed back to callers.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Record;

/// Everything written to the JSON export file.
///
/// Field names are consumed downstream and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportPayload {
    /// Last.fm username the library belongs to.
    pub user: String,

    /// When the export was taken (UTC).
    pub exported_at: DateTime<Utc>,

    /// Raw artist records, in server page order.
    pub artists: Vec<Record>,

    /// Raw album records, in server page order.
    pub albums: Vec<Record>,
}

impl ExportPayload {
    /// Build a payload stamped with the current time.
    pub fn new<S: Into<String>>(user: S, artists: Vec<Record>, albums: Vec<Record>) -> Self {
        Self::at(user, Utc::now(), artists, albums)
    }

    /// Build a payload with an explicit timestamp.
    pub fn at<S: Into<String>>(
        user: S,
        exported_at: DateTime<Utc>,
        artists: Vec<Record>,
        albums: Vec<Record>,
    ) -> Self {
        Self {
            user: user.into(),
            exported_at,
            artists,
            albums,
        }
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportResult {
    /// Username that was exported.
    pub user: String,
    pub artists_count: usize,
    pub albums_count: usize,
    /// Set only when JSON output was requested.
    pub json_path: Option<PathBuf>,
    /// Set only when CSV output was requested.
    pub artists_csv_path: Option<PathBuf>,
    /// Set only when CSV output was requested.
    pub albums_csv_path: Option<PathBuf>,
}

impl ExportResult {
    /// Paths of every file that was written.
    pub fn written_paths(&self) -> Vec<&PathBuf> {
        [&self.json_path, &self.artists_csv_path, &self.albums_csv_path]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Human-readable report, one line per fact.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Exported library for user: {}", self.user),
            format!("Artists: {}", self.artists_count),
            format!("Albums:  {}", self.albums_count),
        ];

        if let Some(path) = &self.json_path {
            lines.push(format!("JSON file: {}", path.display()));
        }
        if let Some(path) = &self.artists_csv_path {
            lines.push(format!("Artists CSV: {}", path.display()));
        }
        if let Some(path) = &self.albums_csv_path {
            lines.push(format!("Albums CSV:  {}", path.display()));
        }

        lines
    }
}
