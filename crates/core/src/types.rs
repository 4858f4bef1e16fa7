use serde::{Deserialize, Serialize};

/// Media type recorded in catalog metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Unknown,
    Movie,
    TvShow,
    Season,
    Episode,
    MusicVideo,
    VideoCollection,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Movie => "movie",
            Self::TvShow => "tvshow",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::MusicVideo => "musicvideo",
            Self::VideoCollection => "videocollection",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which playlist the playlist player is currently driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistKind {
    #[default]
    None,
    Video,
    Music,
}

/// Active GUI window, reduced to the cases the resolver cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowId {
    FullscreenVideo,
    FullscreenGame,
    #[default]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_strings() {
        assert_eq!(MediaType::Movie.as_str(), "movie");
        assert_eq!(MediaType::Episode.as_str(), "episode");
        assert_eq!(MediaType::VideoCollection.as_str(), "videocollection");
        assert_eq!(MediaType::Unknown.as_str(), "");
        assert_eq!(MediaType::MusicVideo.to_string(), "musicvideo");
    }
}
