//! Track catalog
//!
//! A JSON array of track records, loaded once at startup. The player only
//! reads it; order is the list order shown to the user.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::utils::parse_time_label;

/// A single catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Song title
    pub name: String,
    /// Artist name
    pub singer: String,
    /// Album name
    pub album: String,
    /// Cover image location
    pub cover: String,
    /// Media file location
    pub url: String,
    /// Raw LRC lyric text
    #[serde(rename = "lrc")]
    pub lyrics: String,
    /// Duration label, `mm:ss` or `hh:mm:ss`
    #[serde(rename = "duration")]
    pub duration_label: String,
}

impl Track {
    /// Duration in seconds from the label, 0 when the label is unusable
    pub fn duration_secs(&self) -> f64 {
        parse_time_label(&self.duration_label)
    }

    /// Local path of the media file
    pub fn media_path(&self) -> PathBuf {
        PathBuf::from(self.url.strip_prefix("file://").unwrap_or(&self.url))
    }
}

/// Ordered, non-empty list of tracks
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        tracing::info!(
            "Loaded catalog {:?} with {} tracks",
            path,
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let tracks: Vec<Track> =
            serde_json::from_str(content).context("Catalog must be a JSON array of tracks")?;
        Self::new(tracks)
    }

    /// Build a catalog from tracks, rejecting an empty list
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            bail!("Catalog contains no tracks");
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "晴天",
            "singer": "周杰伦",
            "album": "叶惠美",
            "cover": "img/qingtian.jpg",
            "url": "file:///music/qingtian.mp3",
            "lrc": "[00:01.00]故事的小黄花",
            "duration": "04:29"
        },
        { "name": "Untitled", "url": "b.mp3" }
    ]"#;

    #[test]
    fn test_parse_catalog_in_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap_or_else(|e| panic!("{:#}", e));
        assert_eq!(catalog.len(), 2);
        let first = &catalog.tracks()[0];
        assert_eq!(first.name, "晴天");
        assert_eq!(first.singer, "周杰伦");
        assert_eq!(first.lyrics, "[00:01.00]故事的小黄花");
        assert_eq!(first.duration_secs(), 269.0);
        assert_eq!(catalog.get(1).map(|t| t.name.as_str()), Some("Untitled"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let catalog = Catalog::from_json(SAMPLE).unwrap_or_else(|e| panic!("{:#}", e));
        let second = &catalog.tracks()[1];
        assert!(second.singer.is_empty());
        assert!(second.lyrics.is_empty());
        assert_eq!(second.duration_secs(), 0.0);
    }

    #[test]
    fn test_media_path_strips_file_scheme() {
        let catalog = Catalog::from_json(SAMPLE).unwrap_or_else(|e| panic!("{:#}", e));
        assert_eq!(
            catalog.tracks()[0].media_path(),
            PathBuf::from("/music/qingtian.mp3")
        );
        assert_eq!(catalog.tracks()[1].media_path(), PathBuf::from("b.mp3"));
    }

    #[test]
    fn test_empty_or_invalid_catalog_is_rejected() {
        assert!(Catalog::from_json("[]").is_err());
        assert!(Catalog::from_json(r#"{"name": "x"}"#).is_err());
        assert!(Catalog::from_json("null").is_err());
        assert!(Catalog::load(Path::new("/nonexistent/lyra/data.json")).is_err());
    }
}
