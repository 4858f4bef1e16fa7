//! Live-decode stream snapshots.
//!
//! These describe what the player is decoding right now, as opposed to the
//! catalog's scan-time [`StreamDetails`](crate::metadata::StreamDetails).
//! The player/data-cache refreshes them while playback runs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackVideoInfo {
    pub codec_name: String,
    pub width: u32,
    pub height: u32,
    /// Bits per second.
    pub bitrate: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackAudioInfo {
    pub codec_name: String,
    pub channels: i32,
    /// Bits per second.
    pub bitrate: i64,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSubtitleInfo {
    pub language: String,
}
