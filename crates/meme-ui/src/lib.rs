//! Meme UI - Browser-independent UI logic for the meme generator
//!
//! This crate provides:
//! - The explicit UI state and the controls enabled in each state
//! - Volume slider levels, icons and speech gain
//! - Voice list population for the voice selector
//! - Composition of the utterance that reads captions aloud
//! - JSON configuration (element ids, caption style, fit policy)
//! - A session that turns user actions into canvas draw plans
//!
//! # Example
//!
//! ```
//! use meme_ui::{UiEvent, UiState};
//!
//! let state = UiState::default()
//!     .apply(UiEvent::ImageLoaded)
//!     .apply(UiEvent::Submitted);
//!
//! let controls = state.controls();
//! assert!(!controls.submit);
//! assert!(controls.read);
//! ```

pub mod config;
mod session;
mod speech;
mod state;
mod voice;
mod volume;

pub use config::{parse_config, ElementIds, MemeConfig};
pub use session::MemeSession;
pub use speech::Utterance;
pub use state::{ControlSet, UiEvent, UiState};
pub use voice::{resolve_voice, voice_options, Voice, VoiceOption, PLACEHOLDER_VALUE};
pub use volume::{VolumeLevel, DEFAULT_ICON_DIR};

use thiserror::Error;

/// Errors that can occur in UI handling
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Layout error: {0}")]
    CoreError(#[from] meme_core::MemeError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
