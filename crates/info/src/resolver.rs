//! The video info provider.
//!
//! Resolution is two-tiered and the order is load-bearing: catalog metadata
//! answers first, live playback state second. A `None` from every tier tells
//! the dispatcher to consult the next provider in its chain.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Local, NaiveDateTime, TimeDelta};
use tracing::{debug, warn};

use parlor_core::{
    MediaType, PlaybackAudioInfo, PlaybackSubtitleInfo, PlaybackVideoInfo, PlaylistKind,
    VideoItem, VideoMetadata, WindowId,
};

use crate::codes::{InfoCode, InfoQuery};
use crate::format;
use crate::services::{
    Localizer, PlayerState, PlaylistSnapshot, RenderMethod, RenderPipeline, SettingsStore,
    ThumbnailLoader, WindowManager,
};

/// Art path used when a playing video has no cached thumb.
pub const DEFAULT_VIDEO_COVER: &str = "DefaultVideoCover.png";

/// A resolved string label. `fallback` is an alternative the caller may
/// show while the primary value (e.g. artwork) is still loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub value: String,
    pub fallback: Option<String>,
}

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(value: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            fallback: Some(fallback.into()),
        }
    }
}

/// Collaborators the resolver consumes. All injected; the resolver holds no
/// ambient global state.
#[derive(Clone)]
pub struct Services {
    pub thumb_loader: Arc<dyn ThumbnailLoader>,
    pub player: Arc<dyn PlayerState>,
    pub render: Arc<dyn RenderPipeline>,
    pub playlists: Arc<dyn PlaylistSnapshot>,
    pub windows: Arc<dyn WindowManager>,
    pub localizer: Arc<dyn Localizer>,
    pub settings: Arc<dyn SettingsStore>,
}

pub struct VideoInfoResolver {
    services: Services,
    // Written by the player/data-cache thread, read by UI refresh calls.
    video_info: RwLock<PlaybackVideoInfo>,
    audio_info: RwLock<PlaybackAudioInfo>,
    subtitle_info: RwLock<PlaybackSubtitleInfo>,
}

impl VideoInfoResolver {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            video_info: RwLock::new(PlaybackVideoInfo::default()),
            audio_info: RwLock::new(PlaybackAudioInfo::default()),
            subtitle_info: RwLock::new(PlaybackSubtitleInfo::default()),
        }
    }

    /// Refresh the live video stream snapshot.
    pub fn set_video_info(&self, info: PlaybackVideoInfo) {
        *self
            .video_info
            .write()
            .unwrap_or_else(PoisonError::into_inner) = info;
    }

    /// Refresh the live audio stream snapshot.
    pub fn set_audio_info(&self, info: PlaybackAudioInfo) {
        *self
            .audio_info
            .write()
            .unwrap_or_else(PoisonError::into_inner) = info;
    }

    /// Refresh the live subtitle stream snapshot.
    pub fn set_subtitle_info(&self, info: PlaybackSubtitleInfo) {
        *self
            .subtitle_info
            .write()
            .unwrap_or_else(PoisonError::into_inner) = info;
    }

    fn video_info(&self) -> PlaybackVideoInfo {
        self.video_info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn audio_info(&self) -> PlaybackAudioInfo {
        self.audio_info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subtitle_info(&self) -> PlaybackSubtitleInfo {
        self.subtitle_info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Accept an item about to become current and enrich it with artwork.
    ///
    /// Returns false for non-video items and for internet streams that are
    /// playing audio only, so the dispatcher hands the item to another
    /// provider. Blocking: thumbnail lookup hits the filesystem and the
    /// catalog database.
    pub fn prepare_item(&self, item: &mut VideoItem) -> bool {
        if !item.is_video() {
            return false;
        }
        // A .strm playlist can start an audio-only stream; that item belongs
        // to the music provider.
        if item.internet_stream && self.services.player.is_playing_audio() {
            return false;
        }

        debug!(path = %format::redact_credentials(&item.path), "preparing video item");

        if !item.has_art("thumb") {
            if let Err(err) = self.services.thumb_loader.load_item(item) {
                warn!(%err, "thumbnail load failed, continuing without art");
            }
        }

        if item.internet_stream {
            if let Some(playlist_file) = self.services.playlists.playlist_file() {
                debug!(file = %playlist_file, "streaming media, deriving thumb from playlist file");
                let mut playlist_item = VideoItem::new(playlist_file);
                match self.services.thumb_loader.fill_thumb(&mut playlist_item) {
                    Ok(true) => {
                        let thumb = playlist_item.art("thumb").map(str::to_string);
                        if let Some(thumb) = thumb {
                            item.set_art("thumb", thumb);
                        }
                    }
                    Ok(false) => {}
                    Err(err) => warn!(%err, "playlist thumb lookup failed"),
                }
            }
        }
        true
    }

    /// Resolve a string label; `None` defers to the next provider.
    pub fn resolve_label(&self, item: &VideoItem, query: &InfoQuery) -> Option<Label> {
        if let Some(meta) = item.metadata.as_ref() {
            if let Some(label) = self.metadata_label(item, meta, query) {
                return Some(label);
            }
        }
        self.playback_label(item, query)
    }

    /// Resolve an integer value; only percent-played maps here.
    pub fn resolve_int(&self, item: &VideoItem, query: &InfoQuery) -> Option<i64> {
        let meta = item.metadata.as_ref()?;
        match query.code {
            InfoCode::ListItemPercentPlayed => Some(percent_played(meta)),
            _ => None,
        }
    }

    /// Resolve a boolean condition; `None` defers to the next provider.
    pub fn resolve_bool(&self, item: &VideoItem, query: &InfoQuery) -> Option<bool> {
        let meta = item.metadata.as_ref();

        if let Some(meta) = meta {
            match query.code {
                InfoCode::VideoPlayerHasInfo => return Some(!meta.is_empty()),
                InfoCode::ListItemIsResumable => return Some(meta.resume.position_secs > 0.0),
                InfoCode::ListItemIsCollection => {
                    return Some(meta.media_type == MediaType::VideoCollection);
                }
                _ => {}
            }
        }

        match query.code {
            InfoCode::VideoPlayerContent => {
                let content = match meta.map(|m| m.media_type) {
                    Some(MediaType::Movie) => "movies",
                    Some(MediaType::Episode) => "episodes",
                    Some(MediaType::MusicVideo) => "musicvideos",
                    _ => "files",
                };
                let matched = query
                    .text_param
                    .as_deref()
                    .is_some_and(|p| p.eq_ignore_ascii_case(content));
                // A miss defers so another provider can claim the name.
                matched.then_some(true)
            }
            InfoCode::VideoPlayerUsingOverlays => {
                Some(self.services.settings.render_method() == RenderMethod::Overlays)
            }
            InfoCode::VideoPlayerIsFullscreen => Some(matches!(
                self.services.windows.active_window(),
                WindowId::FullscreenVideo | WindowId::FullscreenGame
            )),
            InfoCode::VideoPlayerHasMenu => Some(self.services.player.has_menu()),
            InfoCode::VideoPlayerHasTeletext => self.services.player.has_teletext().then_some(true),
            InfoCode::VideoPlayerHasSubtitles => {
                Some(self.services.player.subtitle_count() > 0)
            }
            InfoCode::VideoPlayerSubtitlesEnabled => {
                Some(self.services.player.subtitles_enabled())
            }
            InfoCode::VideoPlayerIsStereoscopic => {
                Some(!self.services.render.stereo_mode().is_empty())
            }
            InfoCode::ListItemIsStereoscopic => {
                let mode = self.item_stereo_mode(item);
                Some(!mode.is_empty() && mode != "mono")
            }
            _ => None,
        }
    }

    // Item property wins over stream details; streams normalize to the
    // canonical mode names.
    fn item_stereo_mode(&self, item: &VideoItem) -> String {
        if let Some(mode) = item.property_str("stereomode").filter(|m| !m.is_empty()) {
            return mode.to_string();
        }
        item.metadata
            .as_ref()
            .map(|m| format::normalize_stereo_mode(m.stream_details.stereo_mode()).to_string())
            .unwrap_or_default()
    }

    fn metadata_label(
        &self,
        item: &VideoItem,
        meta: &VideoMetadata,
        query: &InfoQuery,
    ) -> Option<Label> {
        use InfoCode::*;

        let localizer = self.services.localizer.as_ref();
        match query.code {
            PlayerPath | PlayerFilename | PlayerFilepath => {
                let mut path = meta.file_name_and_path.clone();
                if path.is_empty() {
                    path = item.path.clone();
                }
                let value = match query.code {
                    PlayerFilename => format::file_name(&path).to_string(),
                    PlayerPath => format::strip_credentials(&format::parent_path(&path)),
                    _ => format::strip_credentials(&path),
                };
                Some(Label::new(value))
            }
            PlayerTitle | VideoPlayerTitle => {
                let mut value = meta.title.clone();
                if value.is_empty() {
                    value = item.label.clone();
                }
                if value.is_empty() {
                    value = format::title_from_path(&item.path);
                }
                Some(Label::new(value))
            }
            ListItemTitle => (!meta.title.is_empty()).then(|| Label::new(meta.title.clone())),
            VideoPlayerOriginalTitle | ListItemOriginalTitle => {
                Some(Label::new(meta.original_title.clone()))
            }
            VideoPlayerGenre | ListItemGenre => Some(Label::new(self.join_list(&meta.genres))),
            VideoPlayerDirector | ListItemDirector => {
                Some(Label::new(self.join_list(&meta.directors)))
            }
            VideoPlayerImdbNumber | ListItemImdbNumber => {
                Some(Label::new(meta.unique_id.clone()))
            }
            VideoPlayerDbId | ListItemDbId => {
                meta.db_id.map(|id| Label::new(id.to_string()))
            }
            VideoPlayerRating | ListItemRating => {
                let rating = meta.rating(query.text_param.as_deref())?;
                (rating.value > 0.0).then(|| Label::new(format::format_rating(rating.value)))
            }
            VideoPlayerRatingAndVotes | ListItemRatingAndVotes => {
                let rating = meta.rating(query.text_param.as_deref())?;
                if rating.value <= 0.0 {
                    return None;
                }
                let rating_str = format::format_rating(rating.value);
                let value = if rating.votes == 0 {
                    rating_str
                } else {
                    localizer
                        .rating_and_votes(&rating_str, &localizer.format_count(rating.votes as i64))
                };
                Some(Label::new(value))
            }
            VideoPlayerUserRating | ListItemUserRating => {
                (meta.user_rating > 0).then(|| Label::new(meta.user_rating.to_string()))
            }
            VideoPlayerVotes | ListItemVotes => {
                let rating = meta.rating(query.text_param.as_deref())?;
                (rating.votes > 0)
                    .then(|| Label::new(localizer.format_count(rating.votes as i64)))
            }
            VideoPlayerYear | ListItemYear => meta
                .year
                .filter(|y| *y > 0)
                .map(|y| Label::new(y.to_string())),
            VideoPlayerPremiered | ListItemPremiered => meta
                .first_aired
                .or(meta.premiere_date)
                .map(|d| Label::new(localizer.format_date(d))),
            VideoPlayerPlot => Some(Label::new(meta.plot.clone())),
            VideoPlayerPlotOutline | ListItemPlotOutline => {
                Some(Label::new(meta.plot_outline.clone()))
            }
            VideoPlayerTagline | ListItemTagline => Some(Label::new(meta.tagline.clone())),
            VideoPlayerTrailer | ListItemTrailer => Some(Label::new(meta.trailer.clone())),
            VideoPlayerEpisode | ListItemEpisode => episode_label(meta).map(Label::new),
            VideoPlayerSeason | ListItemSeason => meta
                .season
                .filter(|s| *s > 0)
                .map(|s| Label::new(s.to_string())),
            VideoPlayerTvShow | ListItemTvShow => Some(Label::new(meta.show_title.clone())),
            VideoPlayerStudio | ListItemStudio => Some(Label::new(self.join_list(&meta.studios))),
            VideoPlayerCountry | ListItemCountry => {
                Some(Label::new(self.join_list(&meta.countries)))
            }
            VideoPlayerMpaa | ListItemMpaa => Some(Label::new(meta.mpaa_rating.clone())),
            VideoPlayerTop250 | ListItemTop250 => {
                (meta.top250 > 0).then(|| Label::new(meta.top250.to_string()))
            }
            VideoPlayerCast | ListItemCast => Some(Label::new(meta.cast_label(false))),
            VideoPlayerCastAndRole | ListItemCastAndRole => {
                Some(Label::new(meta.cast_label(true)))
            }
            VideoPlayerArtist | ListItemArtist => Some(Label::new(self.join_list(&meta.artists))),
            VideoPlayerAlbum | ListItemAlbum => Some(Label::new(meta.album.clone())),
            VideoPlayerWriter | ListItemWriter => {
                Some(Label::new(self.join_list(&meta.writing_credits)))
            }
            VideoPlayerLastPlayed | ListItemLastPlayed => meta
                .last_played
                .map(|dt| Label::new(localizer.format_date(dt.date()))),
            VideoPlayerPlayCount | ListItemPlayCount => {
                (meta.play_count > 0).then(|| Label::new(meta.play_count.to_string()))
            }

            ListItemDuration => (meta.duration_secs > 0).then(|| {
                Label::new(format::seconds_to_time_string(
                    meta.duration_secs,
                    query.time_format,
                ))
            }),
            ListItemTrackNumber => meta.track_number.map(|t| Label::new(t.to_string())),
            ListItemPlot => {
                // Spoiler guard: unwatched movie/episode plots stay hidden
                // unless the user opted in. Shows and collections are exempt;
                // their plots describe the whole run, not one entry.
                let hide = meta.media_type != MediaType::TvShow
                    && meta.media_type != MediaType::VideoCollection
                    && meta.play_count == 0
                    && !self.services.settings.show_unwatched_plots();
                let value = if hide {
                    localizer.unwatched_plot_placeholder()
                } else {
                    meta.plot.clone()
                };
                Some(Label::new(value))
            }
            ListItemStatus => Some(Label::new(meta.status.clone())),
            ListItemTag => Some(Label::new(self.join_list(&meta.tags))),
            ListItemSet => Some(Label::new(meta.set_title.clone())),
            ListItemSetId => meta
                .set_id
                .filter(|id| *id > 0)
                .map(|id| Label::new(id.to_string())),
            ListItemEndTimeResume => {
                let remaining = meta.duration_secs - meta.resume.position_secs as i64;
                Some(Label::new(end_time_label(
                    localizer,
                    Local::now().naive_local(),
                    remaining,
                )))
            }
            ListItemEndTime => Some(Label::new(end_time_label(
                localizer,
                Local::now().naive_local(),
                meta.duration_secs,
            ))),
            ListItemDateAdded => meta
                .date_added
                .map(|dt| Label::new(localizer.format_date(dt.date()))),
            ListItemDbType => Some(Label::new(meta.media_type.to_string())),
            ListItemAppearances => meta.relevance.map(|r| Label::new(r.to_string())),
            ListItemPercentPlayed => Some(Label::new(percent_played(meta).to_string())),

            ListItemVideoCodec => Some(Label::new(meta.stream_details.video_codec())),
            ListItemVideoResolution => Some(Label::new(format::resolution_description(
                meta.stream_details.video_width(),
                meta.stream_details.video_height(),
            ))),
            ListItemVideoAspect => Some(Label::new(format::aspect_description(
                meta.stream_details.video_aspect(),
            ))),
            ListItemAudioCodec => Some(Label::new(meta.stream_details.audio_codec())),
            ListItemAudioChannels => {
                let channels = meta.stream_details.audio_channels();
                (channels > 0).then(|| Label::new(channels.to_string()))
            }
            ListItemAudioLanguage => Some(Label::new(meta.stream_details.audio_language())),
            ListItemSubtitleLanguage => {
                Some(Label::new(meta.stream_details.subtitle_language()))
            }

            ListItemFilename | ListItemFileExtension => {
                let name = if item.from_database {
                    format::file_name(&meta.file_name_and_path)
                } else {
                    format::file_name(&item.path)
                };
                let value = if query.code == ListItemFileExtension {
                    format::file_extension(name).to_string()
                } else {
                    name.to_string()
                };
                Some(Label::new(value))
            }
            ListItemFolderName | ListItemPath => {
                let path = if item.from_database {
                    if item.is_folder {
                        meta.base_path.clone()
                    } else {
                        format::parent_path(&meta.file_name_and_path)
                    }
                } else {
                    format::parent_path(&item.path)
                };
                let path = format::strip_credentials(&path);
                let value = if query.code == ListItemFolderName {
                    format::file_name(path.trim_end_matches(['/', '\\'])).to_string()
                } else {
                    path
                };
                Some(Label::new(value))
            }
            ListItemFilenameAndPath => {
                let path = if item.from_database {
                    meta.file_name_and_path.clone()
                } else {
                    item.path.clone()
                };
                Some(Label::new(format::strip_credentials(&path)))
            }
            _ => None,
        }
    }

    fn playback_label(&self, item: &VideoItem, query: &InfoQuery) -> Option<Label> {
        use InfoCode::*;

        match query.code {
            VideoPlayerPlaylistLength => {
                (self.services.playlists.current() == PlaylistKind::Video).then(|| {
                    Label::new(
                        self.services
                            .playlists
                            .length(PlaylistKind::Video)
                            .to_string(),
                    )
                })
            }
            VideoPlayerPlaylistPosition => {
                (self.services.playlists.current() == PlaylistKind::Video).then(|| {
                    Label::new(
                        self.services
                            .playlists
                            .position(PlaylistKind::Video)
                            .to_string(),
                    )
                })
            }
            VideoPlayerVideoAspect => Some(Label::new(format::aspect_description(
                self.services.render.display_aspect_ratio(),
            ))),
            VideoPlayerStereoscopicMode => Some(Label::new(self.services.render.stereo_mode())),
            VideoPlayerSubtitlesLanguage => Some(Label::new(self.subtitle_info().language)),
            VideoPlayerCover => {
                if self.services.player.is_playing_video() {
                    let value = item.art("thumb").unwrap_or(DEFAULT_VIDEO_COVER).to_string();
                    Some(Label::with_fallback(value, DEFAULT_VIDEO_COVER))
                } else {
                    None
                }
            }
            ListItemStereoscopicMode => Some(Label::new(self.item_stereo_mode(item))),
            VideoPlayerVideoCodec => Some(Label::new(self.video_info().codec_name)),
            VideoPlayerVideoResolution => {
                let info = self.video_info();
                Some(Label::new(format::resolution_description(
                    info.width,
                    info.height,
                )))
            }
            VideoPlayerVideoBitrate => kbps_label(self.video_info().bitrate).map(Label::new),
            VideoPlayerAudioCodec => Some(Label::new(self.audio_info().codec_name)),
            VideoPlayerAudioChannels => {
                let channels = self.audio_info().channels;
                (channels > 0).then(|| Label::new(channels.to_string()))
            }
            VideoPlayerAudioBitrate => kbps_label(self.audio_info().bitrate).map(Label::new),
            VideoPlayerAudioLanguage => Some(Label::new(self.audio_info().language)),
            _ => None,
        }
    }

    fn join_list(&self, parts: &[String]) -> String {
        format::join(parts, &self.services.settings.item_separator())
    }
}

/// Rounded playback percentage from the resume bookmark. Half rounds away
/// from zero; an unset or finished bookmark reads as 0.
fn percent_played(meta: &VideoMetadata) -> i64 {
    let resume = &meta.resume;
    if resume.is_partway() {
        ((resume.position_secs as f32 / resume.total_secs as f32) * 100.0).round() as i64
    } else {
        0
    }
}

/// Episode number label. Episode 0 is invalid; season 0 marks a special,
/// rendered with an "S" prefix.
fn episode_label(meta: &VideoMetadata) -> Option<String> {
    let episode = meta.episode.filter(|e| *e > 0)?;
    match meta.season {
        Some(0) => Some(format!("S{episode}")),
        _ => Some(episode.to_string()),
    }
}

/// Bits per second to a whole-kbps display string.
fn kbps_label(bitrate: i64) -> Option<String> {
    (bitrate > 0).then(|| ((bitrate as f64 / 1000.0).round() as i64).to_string())
}

/// Wall-clock time at which playback of `remaining_secs` would finish.
fn end_time_label(localizer: &dyn Localizer, now: NaiveDateTime, remaining_secs: i64) -> String {
    localizer.format_time((now + TimeDelta::seconds(remaining_secs)).time())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use parlor_core::ResumePoint;

    use super::*;

    struct EnglishLocalizer;
    impl Localizer for EnglishLocalizer {}

    fn meta_with_resume(position: f64, total: f64) -> VideoMetadata {
        VideoMetadata {
            resume: ResumePoint {
                position_secs: position,
                total_secs: total,
            },
            ..Default::default()
        }
    }

    #[test]
    fn percent_played_rounds_half_up() {
        assert_eq!(percent_played(&meta_with_resume(300.0, 3600.0)), 8);
        assert_eq!(percent_played(&meta_with_resume(5.0, 1000.0)), 1); // 0.5 → 1
        assert_eq!(percent_played(&meta_with_resume(4.0, 1000.0)), 0);
        assert_eq!(percent_played(&meta_with_resume(3600.0, 3600.0)), 100);
    }

    #[test]
    fn percent_played_zero_when_not_partway() {
        assert_eq!(percent_played(&meta_with_resume(0.0, 3600.0)), 0);
        assert_eq!(percent_played(&meta_with_resume(10.0, 0.0)), 0);
    }

    #[test]
    fn episode_labels() {
        let mut meta = VideoMetadata {
            episode: Some(5),
            season: Some(2),
            ..Default::default()
        };
        assert_eq!(episode_label(&meta).as_deref(), Some("5"));

        meta.season = Some(0);
        assert_eq!(episode_label(&meta).as_deref(), Some("S5"));

        meta.season = None;
        assert_eq!(episode_label(&meta).as_deref(), Some("5"));

        meta.episode = Some(0);
        assert_eq!(episode_label(&meta), None);

        meta.episode = None;
        assert_eq!(episode_label(&meta), None);
    }

    #[test]
    fn bitrate_to_kbps() {
        assert_eq!(kbps_label(128000).as_deref(), Some("128"));
        assert_eq!(kbps_label(128501).as_deref(), Some("129"));
        assert_eq!(kbps_label(0), None);
        assert_eq!(kbps_label(-1), None);
    }

    #[test]
    fn end_time_arithmetic() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(20, 15, 0).unwrap());
        assert_eq!(end_time_label(&EnglishLocalizer, now, 45 * 60), "21:00");
        // Crosses midnight.
        assert_eq!(
            end_time_label(&EnglishLocalizer, now, 4 * 3600 + 50 * 60),
            "01:05"
        );
    }
}
