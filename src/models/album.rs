//! Album-related models.
//!
//! Last.fm is inconsistent about how an album references its artist: some
//! responses carry a plain string, others a nested object with a `name`
//! field. [`AlbumArtist`] resolves that once per album.

use serde_json::Value;

use super::common::{get_text, Record};

/// Column order of the albums CSV file.
pub const ALBUM_COLUMNS: [&str; 5] = ["name", "artist", "mbid", "playcount", "url"];

/// The `artist` field of an album record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlbumArtist<'a> {
    /// `"artist": "Radiohead"`
    Name(&'a str),
    /// `"artist": {"name": "Radiohead", "mbid": "..."}`
    Nested(&'a Record),
    /// Missing, null, or any other shape.
    Unrecognized,
}

impl<'a> AlbumArtist<'a> {
    /// Classify the `artist` field of an album record.
    pub fn from_album(album: &'a Record) -> Self {
        match album.get("artist") {
            Some(Value::String(name)) => AlbumArtist::Name(name),
            Some(Value::Object(nested)) => AlbumArtist::Nested(nested),
            _ => AlbumArtist::Unrecognized,
        }
    }

    /// The artist name, or an empty string when none can be found.
    pub fn name(&self) -> String {
        match self {
            AlbumArtist::Name(name) => (*name).to_string(),
            AlbumArtist::Nested(nested) => get_text(nested, "name"),
            AlbumArtist::Unrecognized => String::new(),
        }
    }
}

/// Flat projection of an album record, one CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumRow {
    pub name: String,
    /// Normalized artist name.
    pub artist: String,
    /// MusicBrainz ID.
    pub mbid: String,
    pub playcount: String,
    pub url: String,
}

impl AlbumRow {
    /// Project a raw album record. Missing fields become empty strings.
    pub fn from_record(album: &Record) -> Self {
        Self {
            name: get_text(album, "name"),
            artist: AlbumArtist::from_album(album).name(),
            mbid: get_text(album, "mbid"),
            playcount: get_text(album, "playcount"),
            url: get_text(album, "url"),
        }
    }

    /// Cells in [`ALBUM_COLUMNS`] order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.artist.as_str(),
            self.mbid.as_str(),
            self.playcount.as_str(),
            self.url.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn album(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_artist_as_string() {
        let a = album(json!({"name": "OK Computer", "artist": "Radiohead"}));
        assert_eq!(AlbumArtist::from_album(&a), AlbumArtist::Name("Radiohead"));
        assert_eq!(AlbumRow::from_record(&a).artist, "Radiohead");
    }

    #[test]
    fn test_artist_as_mapping() {
        let a = album(json!({
            "name": "OK Computer",
            "artist": {"name": "Radiohead", "mbid": "x"}
        }));
        assert!(matches!(AlbumArtist::from_album(&a), AlbumArtist::Nested(_)));
        assert_eq!(AlbumRow::from_record(&a).artist, "Radiohead");
    }

    #[test]
    fn test_artist_mapping_without_name() {
        let a = album(json!({"artist": {"mbid": "x"}}));
        assert_eq!(AlbumArtist::from_album(&a).name(), "");
    }

    #[test]
    fn test_artist_missing_or_unrecognized() {
        let missing = album(json!({"name": "Kid A"}));
        assert_eq!(AlbumArtist::from_album(&missing), AlbumArtist::Unrecognized);
        assert_eq!(AlbumRow::from_record(&missing).artist, "");

        let list = album(json!({"artist": ["Radiohead"]}));
        assert_eq!(AlbumArtist::from_album(&list), AlbumArtist::Unrecognized);

        let number = album(json!({"artist": 7}));
        assert_eq!(AlbumRow::from_record(&number).artist, "");
    }

    #[test]
    fn test_album_row_projection() {
        let a = album(json!({
            "name": "In Rainbows",
            "artist": {"name": "Radiohead", "mbid": "x", "url": "u"},
            "mbid": "m1",
            "playcount": "87",
            "url": "https://www.last.fm/music/Radiohead/In+Rainbows"
        }));
        assert_eq!(
            AlbumRow::from_record(&a).fields(),
            [
                "In Rainbows",
                "Radiohead",
                "m1",
                "87",
                "https://www.last.fm/music/Radiohead/In+Rainbows",
            ]
        );
    }
}
