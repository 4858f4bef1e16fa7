pub mod item;
pub mod metadata;
pub mod playback;
pub mod types;

pub use item::VideoItem;
pub use metadata::{
    AudioStreamDetail, CastEntry, Rating, ResumePoint, StreamDetails, SubtitleStreamDetail,
    VideoMetadata, VideoStreamDetail,
};
pub use playback::{PlaybackAudioInfo, PlaybackSubtitleInfo, PlaybackVideoInfo};
pub use types::{MediaType, PlaylistKind, WindowId};
