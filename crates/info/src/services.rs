//! Collaborator interfaces consumed by the resolver.
//!
//! The original design reached for application-wide singletons; here every
//! collaborator is an explicit dependency injected at construction.

use chrono::{NaiveDate, NaiveTime};
use parlor_core::{PlaylistKind, VideoItem, WindowId};

use crate::ArtError;

/// Fills in artwork for an item. Both calls perform synchronous file and
/// catalog I/O and may block; callers invoke them from preparation paths
/// only, never from per-frame label resolution.
pub trait ThumbnailLoader: Send + Sync {
    fn load_item(&self, item: &mut VideoItem) -> Result<(), ArtError>;
    /// Returns true when a thumb was found and set on the item.
    fn fill_thumb(&self, item: &mut VideoItem) -> Result<bool, ArtError>;
}

/// State queries against the active player.
pub trait PlayerState: Send + Sync {
    fn is_playing_video(&self) -> bool;
    fn is_playing_audio(&self) -> bool;
    fn has_menu(&self) -> bool;
    fn has_teletext(&self) -> bool;
    fn subtitle_count(&self) -> usize;
    fn subtitles_enabled(&self) -> bool;
}

/// Properties of the currently rendered frame.
pub trait RenderPipeline: Send + Sync {
    fn display_aspect_ratio(&self) -> f32;
    /// Empty when the rendered stream is not stereoscopic.
    fn stereo_mode(&self) -> String;
}

/// Snapshot of the playlist player.
pub trait PlaylistSnapshot: Send + Sync {
    fn current(&self) -> PlaylistKind;
    fn length(&self, kind: PlaylistKind) -> usize;
    /// 1-based position of the playing entry; 0 when nothing plays.
    fn position(&self, kind: PlaylistKind) -> usize;
    /// Playlist file that started the current stream, if any.
    fn playlist_file(&self) -> Option<String>;
}

pub trait WindowManager: Send + Sync {
    fn active_window(&self) -> WindowId;
}

/// Locale-aware rendering. Defaults render plain English so tests and
/// headless embedders need no translation tables.
pub trait Localizer: Send + Sync {
    fn rating_and_votes(&self, rating: &str, votes: &str) -> String {
        format!("{rating} ({votes} votes)")
    }

    /// Shown in place of a plot the user has not watched yet.
    fn unwatched_plot_placeholder(&self) -> String {
        "Plot hidden to avoid spoilers".to_string()
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    fn format_time(&self, time: NaiveTime) -> String {
        time.format("%H:%M").to_string()
    }

    fn format_count(&self, n: i64) -> String {
        crate::format::group_thousands(n)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMethod {
    #[default]
    Auto,
    Overlays,
    Shaders,
}

/// Configuration flags consulted by individual rules.
pub trait SettingsStore: Send + Sync {
    fn show_unwatched_plots(&self) -> bool;
    fn render_method(&self) -> RenderMethod;
    /// Separator used when joining genre/director/… lists.
    fn item_separator(&self) -> String {
        " / ".to_string()
    }
}
