//! UI state and enabled controls

use serde::Serialize;

/// Everything the page needs to know to decide which controls are usable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// An image has finished loading onto the canvas
    pub has_image: bool,
    /// Captions have been drawn and the form is locked
    pub is_submitted: bool,
}

/// A discrete user action (or its completion)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A file was picked in the image input; decoding happens asynchronously
    ImageSelected,
    /// The picked image finished decoding and was drawn
    ImageLoaded,
    /// The caption form was submitted
    Submitted,
    /// The reset button was pressed
    Cleared,
}

/// Enabled flag for every control the page toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSet {
    /// "Generate" submit button
    pub submit: bool,
    /// Reset button
    pub clear: bool,
    /// Read-aloud button
    pub read: bool,
    /// Voice selector
    pub voice_select: bool,
    /// Top and bottom caption inputs
    pub text_inputs: bool,
    /// Image file input
    pub image_input: bool,
}

impl UiState {
    /// State after handling `event`
    pub fn apply(self, event: UiEvent) -> Self {
        let next = match event {
            UiEvent::ImageSelected => self,
            UiEvent::ImageLoaded => Self {
                has_image: true,
                ..self
            },
            UiEvent::Submitted => Self {
                is_submitted: true,
                ..self
            },
            UiEvent::Cleared => Self::default(),
        };
        log::debug!("{:?}: {:?} -> {:?}", event, self, next);
        next
    }

    /// Controls enabled in this state
    ///
    /// Before submission the form is editable and only "Generate" is active.
    /// After submission the form is locked and the button group (reset,
    /// read aloud, voice selector) becomes active. `has_image` is not
    /// consulted: captions can be drawn on an empty canvas.
    pub fn controls(&self) -> ControlSet {
        let locked = self.is_submitted;
        ControlSet {
            submit: !locked,
            clear: locked,
            read: locked,
            voice_select: locked,
            text_inputs: !locked,
            image_input: !locked,
        }
    }
}
