//! Info codes and the query envelope.
//!
//! Codes come in three families. `Player*` and `VideoPlayer*` describe the
//! item being played; `ListItem*` describe the focused list entry. Several
//! codes exist in two families on purpose: the `VideoPlayer*` variant reads
//! the live decode snapshot while the `ListItem*` variant reads scan-time
//! stream details, and they must stay distinct.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoCode {
    // Player family: path-oriented labels for the current file.
    PlayerPath,
    PlayerFilename,
    PlayerFilepath,
    PlayerTitle,

    // VideoPlayer family, catalog-backed.
    VideoPlayerTitle,
    VideoPlayerOriginalTitle,
    VideoPlayerGenre,
    VideoPlayerDirector,
    VideoPlayerImdbNumber,
    VideoPlayerDbId,
    VideoPlayerRating,
    VideoPlayerRatingAndVotes,
    VideoPlayerUserRating,
    VideoPlayerVotes,
    VideoPlayerYear,
    VideoPlayerPremiered,
    VideoPlayerPlot,
    VideoPlayerPlotOutline,
    VideoPlayerTagline,
    VideoPlayerTrailer,
    VideoPlayerEpisode,
    VideoPlayerSeason,
    VideoPlayerTvShow,
    VideoPlayerStudio,
    VideoPlayerCountry,
    VideoPlayerMpaa,
    VideoPlayerTop250,
    VideoPlayerCast,
    VideoPlayerCastAndRole,
    VideoPlayerArtist,
    VideoPlayerAlbum,
    VideoPlayerWriter,
    VideoPlayerLastPlayed,
    VideoPlayerPlayCount,

    // VideoPlayer family, live-decode-backed.
    VideoPlayerPlaylistLength,
    VideoPlayerPlaylistPosition,
    VideoPlayerVideoAspect,
    VideoPlayerStereoscopicMode,
    VideoPlayerSubtitlesLanguage,
    VideoPlayerCover,
    VideoPlayerVideoCodec,
    VideoPlayerVideoResolution,
    VideoPlayerVideoBitrate,
    VideoPlayerAudioCodec,
    VideoPlayerAudioChannels,
    VideoPlayerAudioBitrate,
    VideoPlayerAudioLanguage,

    // VideoPlayer family, boolean conditions.
    VideoPlayerHasInfo,
    VideoPlayerContent,
    VideoPlayerUsingOverlays,
    VideoPlayerIsFullscreen,
    VideoPlayerHasMenu,
    VideoPlayerHasTeletext,
    VideoPlayerHasSubtitles,
    VideoPlayerSubtitlesEnabled,
    VideoPlayerIsStereoscopic,

    // ListItem family.
    ListItemTitle,
    ListItemOriginalTitle,
    ListItemGenre,
    ListItemDirector,
    ListItemImdbNumber,
    ListItemDbId,
    ListItemRating,
    ListItemRatingAndVotes,
    ListItemUserRating,
    ListItemVotes,
    ListItemYear,
    ListItemPremiered,
    ListItemPlot,
    ListItemPlotOutline,
    ListItemTagline,
    ListItemTrailer,
    ListItemEpisode,
    ListItemSeason,
    ListItemTvShow,
    ListItemStudio,
    ListItemCountry,
    ListItemMpaa,
    ListItemTop250,
    ListItemCast,
    ListItemCastAndRole,
    ListItemArtist,
    ListItemAlbum,
    ListItemWriter,
    ListItemLastPlayed,
    ListItemPlayCount,
    ListItemDuration,
    ListItemTrackNumber,
    ListItemStatus,
    ListItemTag,
    ListItemSet,
    ListItemSetId,
    ListItemEndTime,
    ListItemEndTimeResume,
    ListItemDateAdded,
    ListItemDbType,
    ListItemAppearances,
    ListItemPercentPlayed,
    ListItemVideoCodec,
    ListItemVideoResolution,
    ListItemVideoAspect,
    ListItemAudioCodec,
    ListItemAudioChannels,
    ListItemAudioLanguage,
    ListItemSubtitleLanguage,
    ListItemFilename,
    ListItemFileExtension,
    ListItemFolderName,
    ListItemPath,
    ListItemFilenameAndPath,
    ListItemStereoscopicMode,
    ListItemIsResumable,
    ListItemIsCollection,
    ListItemIsStereoscopic,
}

/// Style for rendering a duration as a clock string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// mm:ss below one hour, h:mm:ss above.
    #[default]
    Guess,
    Secs,
    Mins,
    Hours,
    MmSs,
    HhMm,
    HhMmSs,
}

/// A resolution request: the code plus its auxiliary parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoQuery {
    pub code: InfoCode,
    /// Rating source for rating codes, content name for the content match.
    pub text_param: Option<String>,
    pub time_format: TimeFormat,
}

impl InfoQuery {
    pub fn new(code: InfoCode) -> Self {
        Self {
            code,
            text_param: None,
            time_format: TimeFormat::default(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.text_param = Some(param.into());
        self
    }

    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }
}
