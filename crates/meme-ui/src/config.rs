//! Page configuration
//!
//! Configuration is plain JSON. Every field is optional; missing fields take
//! the defaults of the stock meme generator page.
//!
//! ```json
//! {
//!     "elements": { "canvas": "user-image" },
//!     "caption": { "font": "40px Impact", "borderGap": 40 },
//!     "fitPolicy": "contain",
//!     "iconDir": "assets/icons"
//! }
//! ```

use crate::volume::DEFAULT_ICON_DIR;
use crate::{Result, UiError};
use meme_core::{CaptionStyle, FitPolicy};
use serde::{Deserialize, Serialize};

/// Ids of the page elements the generator binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    /// `<canvas>` the meme is drawn on
    pub canvas: String,
    /// `<input type=file>` for the source image
    pub image_input: String,
    /// `<form>` holding the caption inputs and the submit button
    pub form: String,
    /// Container of the reset and read-aloud buttons
    pub button_group: String,
    /// Top caption `<input>`
    pub text_top: String,
    /// Bottom caption `<input>`
    pub text_bottom: String,
    /// Voice `<select>`
    pub voice_select: String,
    /// Container of the volume slider and its icon
    pub volume_group: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "user-image".to_string(),
            image_input: "image-input".to_string(),
            form: "generate-meme".to_string(),
            button_group: "button-group".to_string(),
            text_top: "text-top".to_string(),
            text_bottom: "text-bottom".to_string(),
            voice_select: "voice-selection".to_string(),
            volume_group: "volume-group".to_string(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemeConfig {
    /// Element ids
    pub elements: ElementIds,
    /// Caption style
    pub caption: CaptionStyle,
    /// How loaded images are fitted to the canvas
    pub fit_policy: FitPolicy,
    /// Directory of the `volume-level-N.svg` icons
    pub icon_dir: String,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            caption: CaptionStyle::default(),
            fit_policy: FitPolicy::default(),
            icon_dir: DEFAULT_ICON_DIR.to_string(),
        }
    }
}

impl MemeConfig {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let caption = &self.caption;
        if !caption.border_gap.is_finite() || caption.border_gap < 0.0 {
            return Err(UiError::ConfigError(format!(
                "caption.borderGap must be a non-negative number, got {}",
                caption.border_gap
            )));
        }
        if !caption.line_width.is_finite() || caption.line_width < 0.0 {
            return Err(UiError::ConfigError(format!(
                "caption.lineWidth must be a non-negative number, got {}",
                caption.line_width
            )));
        }
        if caption.font.trim().is_empty() {
            return Err(UiError::ConfigError("caption.font is empty".to_string()));
        }

        let elements = &self.elements;
        let ids = [
            ("canvas", &elements.canvas),
            ("imageInput", &elements.image_input),
            ("form", &elements.form),
            ("buttonGroup", &elements.button_group),
            ("textTop", &elements.text_top),
            ("textBottom", &elements.text_bottom),
            ("voiceSelect", &elements.voice_select),
            ("volumeGroup", &elements.volume_group),
        ];
        for (field, id) in ids {
            if id.trim().is_empty() {
                return Err(UiError::ConfigError(format!(
                    "elements.{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse and validate a configuration from JSON
pub fn parse_config(json: &str) -> Result<MemeConfig> {
    let config: MemeConfig =
        serde_json::from_str(json).map_err(|e| UiError::ConfigError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
