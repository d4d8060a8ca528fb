//! Single-page session
//!
//! Handles one user action at a time and returns the canvas operations it
//! requires. The browser layer only forwards events here and replays the
//! returned ops.

use crate::config::MemeConfig;
use crate::speech::Utterance;
use crate::state::{ControlSet, UiEvent, UiState};
use crate::voice::resolve_voice;
use crate::volume::VolumeLevel;
use crate::Result;
use meme_core::{caption_frame, clear_frame, ensure_positive, image_frame, DrawOp, Size};

/// Meme generator session bound to one canvas
#[derive(Debug, Clone)]
pub struct MemeSession {
    config: MemeConfig,
    surface: Size,
    state: UiState,
}

impl MemeSession {
    /// Create a session for a canvas of size `surface`
    pub fn new(config: MemeConfig, surface: Size) -> Result<Self> {
        config.validate()?;
        ensure_positive("surfaceWidth", surface.width)?;
        ensure_positive("surfaceHeight", surface.height)?;

        Ok(Self {
            config,
            surface,
            state: UiState::default(),
        })
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Controls enabled in the current state
    pub fn controls(&self) -> ControlSet {
        self.state.controls()
    }

    fn dispatch(&mut self, event: UiEvent) {
        self.state = self.state.apply(event);
    }

    /// A file was picked; the image is still decoding
    pub fn image_selected(&mut self) {
        self.dispatch(UiEvent::ImageSelected);
    }

    /// The picked image decoded with natural size `image`
    ///
    /// An image that finishes decoding after the captions were drawn is not
    /// drawn (no ops), so it cannot paint over them.
    pub fn image_loaded(&mut self, image: Size) -> Result<Vec<DrawOp>> {
        let ops = image_frame(self.surface, image, self.config.fit_policy)?;
        self.dispatch(UiEvent::ImageLoaded);
        if self.state.is_submitted {
            log::warn!("image loaded after submit, not redrawn");
            return Ok(Vec::new());
        }
        Ok(ops)
    }

    /// Draw the captions and lock the form
    ///
    /// Ignored (no ops) while already submitted.
    pub fn submit(&mut self, top: &str, bottom: &str) -> Result<Vec<DrawOp>> {
        if self.state.is_submitted {
            log::warn!("submit ignored: captions already drawn");
            return Ok(Vec::new());
        }
        let ops = caption_frame(self.surface, &self.config.caption, top, bottom)?;
        self.dispatch(UiEvent::Submitted);
        Ok(ops)
    }

    /// Erase the canvas and unlock the form
    pub fn clear(&mut self) -> Result<Vec<DrawOp>> {
        let ops = clear_frame(self.surface)?;
        self.dispatch(UiEvent::Cleared);
        Ok(ops)
    }

    /// Utterance for the read-aloud button
    ///
    /// `selected_voice` is the voice selector's value; `voice_count` the
    /// number of voices the platform currently reports.
    pub fn utterance(
        &self,
        top: &str,
        bottom: &str,
        selected_voice: &str,
        voice_count: usize,
        volume_percent: f64,
    ) -> Utterance {
        let voice_index = resolve_voice(selected_voice, voice_count);
        Utterance::compose(top, bottom, voice_index, volume_percent)
    }

    /// Icon `src` and `alt` for a volume slider value
    pub fn volume_icon(&self, volume_percent: f64) -> (String, String) {
        let level = VolumeLevel::from_percent(volume_percent);
        (level.icon_path(&self.config.icon_dir), level.alt_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UiError;
    use meme_core::MemeError;

    fn session() -> MemeSession {
        MemeSession::new(MemeConfig::default(), Size::new(400.0, 400.0)).unwrap()
    }

    #[test]
    fn test_rejects_bad_surface() {
        assert!(MemeSession::new(MemeConfig::default(), Size::new(0.0, 400.0)).is_err());
        let err = MemeSession::new(MemeConfig::default(), Size::new(400.0, f64::NAN)).unwrap_err();
        assert!(matches!(
            err,
            UiError::CoreError(MemeError::InvalidDimension {
                name: "surfaceHeight",
                ..
            })
        ));
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let mut session = session();
        assert!(session.image_loaded(Size::new(-1.0, 5.0)).is_err());
        assert!(!session.state().has_image);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut session = session();
        assert_eq!(session.submit("a", "b").unwrap().len(), 5);
        assert!(session.submit("a", "b").unwrap().is_empty());
    }

    #[test]
    fn test_late_image_load_keeps_captions() {
        let mut session = session();
        session.image_selected();
        session.submit("top", "bottom").unwrap();

        let ops = session.image_loaded(Size::new(100.0, 200.0)).unwrap();
        assert!(ops.is_empty());
        assert!(session.state().has_image);
        assert!(session.state().is_submitted);

        session.clear().unwrap();
        assert_eq!(session.image_loaded(Size::new(100.0, 200.0)).unwrap().len(), 3);
    }

    #[test]
    fn test_volume_icon() {
        let (src, alt) = session().volume_icon(50.0);
        assert_eq!(src, "icons/volume-level-2.svg");
        assert_eq!(alt, "Volume Level 2");
    }
}
