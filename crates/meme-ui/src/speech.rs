//! Read-aloud utterances

use crate::volume::VolumeLevel;
use serde::Serialize;

/// What the speech synthesizer is asked to say
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
    /// Top and bottom caption joined by a single space
    pub text: String,
    /// Index into the platform voice list; `None` uses the platform default
    pub voice_index: Option<usize>,
    /// Gain between 0.0 and 1.0
    pub volume: f64,
}

impl Utterance {
    /// Compose the utterance for the current captions and controls
    pub fn compose(
        top: &str,
        bottom: &str,
        voice_index: Option<usize>,
        volume_percent: f64,
    ) -> Self {
        Self {
            text: format!("{} {}", top, bottom),
            voice_index,
            volume: VolumeLevel::gain(volume_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        let utterance = Utterance::compose("one does not", "simply", Some(1), 40.0);
        assert_eq!(utterance.text, "one does not simply");
        assert_eq!(utterance.voice_index, Some(1));
        assert_eq!(utterance.volume, 0.4);
    }

    #[test]
    fn test_compose_keeps_separator_for_empty_captions() {
        let utterance = Utterance::compose("", "", None, 100.0);
        assert_eq!(utterance.text, " ");
        assert_eq!(utterance.volume, 1.0);
    }
}
