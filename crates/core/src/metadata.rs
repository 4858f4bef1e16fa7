//! Catalog metadata for a video item.
//!
//! Every field is optional in spirit: an empty string, an empty list, or a
//! `None` means "unknown" and must never crash a consumer. Readers are
//! expected to fall back or report "not found".

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::MediaType;

/// A rating from one scraper source (e.g. "imdb", "themoviedb").
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f32,
    pub votes: i32,
}

/// Saved resume bookmark. Seconds, not milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub position_secs: f64,
    pub total_secs: f64,
}

impl ResumePoint {
    /// True when the bookmark sits somewhere inside the file.
    pub fn is_partway(&self) -> bool {
        self.total_secs > 0.0 && self.position_secs > 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastEntry {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoStreamDetail {
    pub codec: String,
    pub width: u32,
    pub height: u32,
    pub aspect: f32,
    pub stereo_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioStreamDetail {
    pub codec: String,
    pub channels: i32,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStreamDetail {
    pub language: String,
}

/// Per-stream technical details captured at scan time.
///
/// Accessors never panic: a missing stream yields an empty/zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDetails {
    pub video: Vec<VideoStreamDetail>,
    pub audio: Vec<AudioStreamDetail>,
    pub subtitle: Vec<SubtitleStreamDetail>,
}

impl StreamDetails {
    pub fn video_codec(&self) -> &str {
        self.video.first().map(|v| v.codec.as_str()).unwrap_or("")
    }

    pub fn video_width(&self) -> u32 {
        self.video.first().map(|v| v.width).unwrap_or(0)
    }

    pub fn video_height(&self) -> u32 {
        self.video.first().map(|v| v.height).unwrap_or(0)
    }

    pub fn video_aspect(&self) -> f32 {
        self.video.first().map(|v| v.aspect).unwrap_or(0.0)
    }

    pub fn stereo_mode(&self) -> &str {
        self.video
            .first()
            .map(|v| v.stereo_mode.as_str())
            .unwrap_or("")
    }

    /// The audio stream with the most channels wins.
    fn best_audio(&self) -> Option<&AudioStreamDetail> {
        self.audio.iter().max_by_key(|a| a.channels)
    }

    pub fn audio_codec(&self) -> &str {
        self.best_audio().map(|a| a.codec.as_str()).unwrap_or("")
    }

    pub fn audio_channels(&self) -> i32 {
        self.best_audio().map(|a| a.channels).unwrap_or(-1)
    }

    pub fn audio_language(&self) -> &str {
        self.best_audio().map(|a| a.language.as_str()).unwrap_or("")
    }

    pub fn subtitle_language(&self) -> &str {
        self.subtitle
            .first()
            .map(|s| s.language.as_str())
            .unwrap_or("")
    }
}

/// Read-only metadata record owned by the catalog item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub original_title: String,
    pub sort_title: String,
    pub show_title: String,

    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub studios: Vec<String>,
    pub countries: Vec<String>,
    pub writing_credits: Vec<String>,
    pub artists: Vec<String>,
    pub tags: Vec<String>,
    pub cast: Vec<CastEntry>,

    pub plot: String,
    pub plot_outline: String,
    pub tagline: String,
    pub trailer: String,
    pub mpaa_rating: String,
    pub album: String,
    /// Production status of a show ("Continuing", "Ended", …).
    pub status: String,

    /// Ratings keyed by scraper source.
    pub ratings: BTreeMap<String, Rating>,
    pub default_rating_source: String,
    pub user_rating: i32,
    pub top250: i32,

    pub year: Option<i32>,
    pub premiere_date: Option<NaiveDate>,
    pub first_aired: Option<NaiveDate>,
    pub last_played: Option<NaiveDateTime>,
    pub date_added: Option<NaiveDateTime>,

    pub play_count: i32,
    pub resume: ResumePoint,
    pub duration_secs: i64,

    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub track_number: Option<i32>,
    /// Appearance count for cast-member listings.
    pub relevance: Option<i32>,

    pub unique_id: String,
    pub db_id: Option<i64>,
    pub set_title: String,
    pub set_id: Option<i64>,
    pub media_type: MediaType,

    /// Path stored in the catalog; may differ from the browse path.
    pub file_name_and_path: String,
    pub base_path: String,

    pub stream_details: StreamDetails,
}

impl VideoMetadata {
    /// A record with none of the identifying fields set carries no info
    /// worth offering to the dispatcher.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.original_title.is_empty()
            && self.show_title.is_empty()
            && self.plot.is_empty()
            && self.genres.is_empty()
            && self.cast.is_empty()
            && self.db_id.is_none()
            && self.duration_secs == 0
    }

    /// Look up a rating, defaulting to the record's default source when the
    /// caller passes none.
    pub fn rating(&self, source: Option<&str>) -> Option<&Rating> {
        let key = source
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_rating_source);
        self.ratings.get(key)
    }

    /// Cast listing, one entry per line, optionally with roles.
    pub fn cast_label(&self, include_role: bool) -> String {
        self.cast
            .iter()
            .map(|c| {
                if include_role && !c.role.is_empty() {
                    format!("{} as {}", c.name, c.role)
                } else {
                    c.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_partway() {
        let r = ResumePoint {
            position_secs: 300.0,
            total_secs: 3600.0,
        };
        assert!(r.is_partway());

        let unset = ResumePoint::default();
        assert!(!unset.is_partway());

        let no_total = ResumePoint {
            position_secs: 10.0,
            total_secs: 0.0,
        };
        assert!(!no_total.is_partway());
    }

    #[test]
    fn empty_record() {
        assert!(VideoMetadata::default().is_empty());

        let meta = VideoMetadata {
            title: "Heat".into(),
            ..Default::default()
        };
        assert!(!meta.is_empty());

        let db_only = VideoMetadata {
            db_id: Some(12),
            ..Default::default()
        };
        assert!(!db_only.is_empty());
    }

    #[test]
    fn rating_source_lookup() {
        let mut meta = VideoMetadata::default();
        meta.ratings.insert(
            "imdb".into(),
            Rating {
                value: 8.1,
                votes: 1000,
            },
        );
        meta.ratings.insert(
            "themoviedb".into(),
            Rating {
                value: 7.4,
                votes: 200,
            },
        );
        meta.default_rating_source = "imdb".into();

        assert_eq!(meta.rating(None).unwrap().votes, 1000);
        assert_eq!(meta.rating(Some("")).unwrap().votes, 1000);
        assert_eq!(meta.rating(Some("themoviedb")).unwrap().votes, 200);
        assert!(meta.rating(Some("trakt")).is_none());
    }

    #[test]
    fn stream_details_pick_best_audio() {
        let details = StreamDetails {
            audio: vec![
                AudioStreamDetail {
                    codec: "aac".into(),
                    channels: 2,
                    language: "eng".into(),
                },
                AudioStreamDetail {
                    codec: "dts".into(),
                    channels: 6,
                    language: "fra".into(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(details.audio_codec(), "dts");
        assert_eq!(details.audio_channels(), 6);
        assert_eq!(details.audio_language(), "fra");
    }

    #[test]
    fn stream_details_absent_streams() {
        let details = StreamDetails::default();
        assert_eq!(details.video_codec(), "");
        assert_eq!(details.video_width(), 0);
        assert_eq!(details.audio_channels(), -1);
        assert_eq!(details.subtitle_language(), "");
    }

    #[test]
    fn cast_rendering() {
        let meta = VideoMetadata {
            cast: vec![
                CastEntry {
                    name: "Al Pacino".into(),
                    role: "Vincent Hanna".into(),
                },
                CastEntry {
                    name: "Robert De Niro".into(),
                    role: String::new(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(meta.cast_label(false), "Al Pacino\nRobert De Niro");
        assert_eq!(
            meta.cast_label(true),
            "Al Pacino as Vincent Hanna\nRobert De Niro"
        );
    }
}
