//! Library export pipeline.
//!
//! Fetches a user's artists and albums and writes them to a pretty-printed
//! JSON document and/or a pair of CSV files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::{LastFmClient, DEFAULT_PAGE_LIMIT};
use crate::error::ExportError;
use crate::models::{
    AlbumRow, ArtistRow, ExportPayload, ExportResult, Record, ALBUM_COLUMNS, ARTIST_COLUMNS,
};

/// Base filename used when the caller does not pick one.
pub const DEFAULT_BASE_NAME: &str = "lastfm_export";

type Result<T> = std::result::Result<T, ExportError>;

/// What to export and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Created if it does not exist.
    pub output_dir: PathBuf,
    /// Stem shared by every output file.
    pub base_name: String,
    /// Write `<base_name>.json`.
    pub write_json: bool,
    /// Write `<base_name>_artists.csv` and `<base_name>_albums.csv`.
    pub write_csv: bool,
    pub artists_per_page: u32,
    pub albums_per_page: u32,
    /// Only export albums by this artist (ignored when empty).
    pub album_artist_filter: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
            write_json: true,
            write_csv: true,
            artists_per_page: DEFAULT_PAGE_LIMIT,
            albums_per_page: DEFAULT_PAGE_LIMIT,
            album_artist_filter: None,
        }
    }
}

impl ExportOptions {
    /// Options writing into `output_dir` with every other setting at its default.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.base_name))
    }

    pub fn artists_csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_artists.csv", self.base_name))
    }

    pub fn albums_csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_albums.csv", self.base_name))
    }
}

/// Exports one user's library through a [`LastFmClient`].
#[derive(Debug, Clone)]
pub struct LibraryExporter<'a> {
    client: &'a LastFmClient,
    username: String,
}

impl<'a> LibraryExporter<'a> {
    pub fn new<S: Into<String>>(client: &'a LastFmClient, username: S) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    /// Fetch the full library and write the requested formats.
    ///
    /// The output directory is created first. Both collections are fetched
    /// before anything is written, so an API failure leaves no files behind.
    /// A write failure stops further writes but keeps earlier files.
    pub fn export_library(&self, options: &ExportOptions) -> Result<ExportResult> {
        info!(
            "Exporting Last.fm library for {} into {}",
            self.username,
            options.output_dir.display()
        );
        fs::create_dir_all(&options.output_dir)
            .map_err(|e| ExportError::persistence(&options.output_dir, e))?;

        let artists = self
            .client
            .get_user_artists(&self.username, options.artists_per_page)?;
        info!("Fetched {} artists", artists.len());

        let albums = self.client.get_user_albums(
            &self.username,
            options.albums_per_page,
            options.album_artist_filter.as_deref(),
        )?;
        info!("Fetched {} albums", albums.len());

        let payload = ExportPayload::new(self.username.as_str(), artists, albums);

        let mut result = ExportResult {
            user: payload.user.clone(),
            artists_count: payload.artists.len(),
            albums_count: payload.albums.len(),
            ..Default::default()
        };

        if options.write_json {
            let path = options.json_path();
            write_json(&payload, &path)?;
            result.json_path = Some(path);
        }

        if options.write_csv {
            let artists_path = options.artists_csv_path();
            write_artists_csv(&payload.artists, &artists_path)?;
            result.artists_csv_path = Some(artists_path);

            let albums_path = options.albums_csv_path();
            write_albums_csv(&payload.albums, &albums_path)?;
            result.albums_csv_path = Some(albums_path);
        }

        Ok(result)
    }
}

/// Write the whole payload as indented JSON.
pub fn write_json(payload: &ExportPayload, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ExportError::persistence(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, payload)
        .map_err(|e| ExportError::persistence(path, e))?;
    writer
        .flush()
        .map_err(|e| ExportError::persistence(path, e))?;

    info!("Wrote {}", path.display());
    Ok(())
}

/// Write one CSV row per artist. The header is always written.
pub fn write_artists_csv(artists: &[Record], path: &Path) -> Result<()> {
    write_csv(path, &ARTIST_COLUMNS, artists, |artist, writer| {
        writer.write_record(ArtistRow::from_record(artist).fields())
    })
}

/// Write one CSV row per album, with the artist name normalized.
pub fn write_albums_csv(albums: &[Record], path: &Path) -> Result<()> {
    write_csv(path, &ALBUM_COLUMNS, albums, |album, writer| {
        writer.write_record(AlbumRow::from_record(album).fields())
    })
}

fn write_csv<F>(path: &Path, header: &[&str], records: &[Record], mut write_row: F) -> Result<()>
where
    F: FnMut(&Record, &mut csv::Writer<File>) -> csv::Result<()>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(|e| ExportError::persistence(path, e))?;

    writer
        .write_record(header)
        .map_err(|e| ExportError::persistence(path, e))?;
    for record in records {
        write_row(record, &mut writer).map_err(|e| ExportError::persistence(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::persistence(path, e))?;

    info!("Wrote {} ({} rows)", path.display(), records.len());
    Ok(())
}
