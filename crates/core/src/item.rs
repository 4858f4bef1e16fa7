//! A browsable file/database entry that may carry video metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::VideoMetadata;

static VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "flv", "webm", "ts", "mpg", "mpeg", "3gp", "ogv",
    "strm",
];

/// Opaque handle the resolver reads from. Art and free-form properties are
/// mutated by collaborators (thumb loader, playlist player); metadata is
/// immutable for the duration of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub label: String,
    pub path: String,
    pub is_folder: bool,
    /// Item originates from the catalog database rather than a file browse.
    pub from_database: bool,
    pub internet_stream: bool,
    art: BTreeMap<String, String>,
    properties: BTreeMap<String, serde_json::Value>,
    pub metadata: Option<VideoMetadata>,
}

impl VideoItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn is_video(&self) -> bool {
        if self.metadata.is_some() {
            return true;
        }
        self.path
            .rsplit('.')
            .next()
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }

    pub fn has_art(&self, kind: &str) -> bool {
        self.art.contains_key(kind)
    }

    pub fn art(&self, kind: &str) -> Option<&str> {
        self.art.get(kind).map(String::as_str)
    }

    pub fn set_art(&mut self, kind: impl Into<String>, path: impl Into<String>) {
        self.art.insert(kind.into(), path.into());
    }

    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }

    /// String view of a property; non-string values read as absent.
    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(|v| v.as_str())
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.properties.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_detection_by_extension() {
        assert!(VideoItem::new("/movies/Heat (1995).mkv").is_video());
        assert!(VideoItem::new("/movies/clip.MP4").is_video());
        assert!(!VideoItem::new("/music/track.flac").is_video());
        assert!(!VideoItem::new("/movies/poster.jpg").is_video());
    }

    #[test]
    fn video_detection_by_metadata() {
        let mut item = VideoItem::new("videodb://movies/1");
        assert!(!item.is_video());
        item.metadata = Some(VideoMetadata::default());
        assert!(item.is_video());
    }

    #[test]
    fn art_and_properties() {
        let mut item = VideoItem::new("/movies/a.mkv");
        assert!(!item.has_art("thumb"));
        item.set_art("thumb", "/cache/a.jpg");
        assert_eq!(item.art("thumb"), Some("/cache/a.jpg"));

        item.set_property("stereomode", serde_json::json!("top_bottom"));
        assert_eq!(item.property_str("stereomode"), Some("top_bottom"));
        item.set_property("count", serde_json::json!(3));
        assert_eq!(item.property_str("count"), None);
    }
}
