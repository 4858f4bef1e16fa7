//! Video info provider for the label resolution layer.
//!
//! The GUI resolves display labels through a chain of providers keyed on an
//! [`InfoCode`]. This crate implements the video provider: given a
//! [`VideoItem`](parlor_core::VideoItem) and an [`InfoQuery`] it yields a
//! string, integer, or boolean, or `None` so the dispatcher can ask the
//! next provider in its chain.

pub mod codes;
pub mod format;
pub mod resolver;
pub mod services;

use thiserror::Error;

pub use codes::{InfoCode, InfoQuery, TimeFormat};
pub use resolver::{Label, Services, VideoInfoResolver};
pub use services::{
    Localizer, PlayerState, PlaylistSnapshot, RenderMethod, RenderPipeline, SettingsStore,
    ThumbnailLoader, WindowManager,
};

/// Errors raised by the thumbnail-loading side effect of item preparation.
/// Resolution itself never errors; absent data resolves to "not found".
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("art lookup failed: {0}")]
    Lookup(String),
}
