//! Artist-related models.

use super::common::{get_text, Record};

/// Column order of the artists CSV file.
pub const ARTIST_COLUMNS: [&str; 6] = [
    "name",
    "mbid",
    "playcount",
    "url",
    "streamable",
    "tagcount",
];

/// Flat projection of an artist record, one CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistRow {
    pub name: String,
    /// MusicBrainz ID.
    pub mbid: String,
    pub playcount: String,
    pub url: String,
    pub streamable: String,
    pub tagcount: String,
}

impl ArtistRow {
    /// Project a raw artist record. Missing fields become empty strings.
    pub fn from_record(artist: &Record) -> Self {
        Self {
            name: get_text(artist, "name"),
            mbid: get_text(artist, "mbid"),
            playcount: get_text(artist, "playcount"),
            url: get_text(artist, "url"),
            streamable: get_text(artist, "streamable"),
            tagcount: get_text(artist, "tagcount"),
        }
    }

    /// Cells in [`ARTIST_COLUMNS`] order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.mbid.as_str(),
            self.playcount.as_str(),
            self.url.as_str(),
            self.streamable.as_str(),
            self.tagcount.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artist_row_projection() {
        let artist = json!({
            "name": "Radiohead",
            "mbid": "a74b1b7f-71a5-4011-9441-d0b5e4122711",
            "playcount": "1234",
            "url": "https://www.last.fm/music/Radiohead",
            "streamable": "0",
            "tagcount": "3",
            "image": [{"#text": "", "size": "small"}]
        });
        let row = ArtistRow::from_record(artist.as_object().unwrap());

        assert_eq!(
            row.fields(),
            [
                "Radiohead",
                "a74b1b7f-71a5-4011-9441-d0b5e4122711",
                "1234",
                "https://www.last.fm/music/Radiohead",
                "0",
                "3",
            ]
        );
    }

    #[test]
    fn test_artist_row_defaults() {
        let artist = json!({"name": "Unknown"});
        let row = ArtistRow::from_record(artist.as_object().unwrap());
        assert_eq!(row.name, "Unknown");
        assert_eq!(row.mbid, "");
        assert_eq!(row.tagcount, "");
    }
}
