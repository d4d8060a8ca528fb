//! Voice selector population

use serde::{Deserialize, Serialize};

/// Value of the placeholder option shown before voices are available
pub const PLACEHOLDER_VALUE: &str = "none";

/// A speech synthesis voice as reported by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    /// Whether this is the platform's default voice
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

/// An `<option>` for the voice selector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOption {
    /// Visible text, e.g. `Alex (en-US) -- DEFAULT`
    pub label: String,
    /// `data-name` attribute
    pub name: String,
    /// `data-lang` attribute
    pub lang: String,
    /// `value` attribute: index into the platform voice list
    pub value: String,
}

/// Build selector options for `voices`, in platform order
pub fn voice_options(voices: &[Voice]) -> Vec<VoiceOption> {
    voices
        .iter()
        .enumerate()
        .map(|(index, voice)| {
            let mut label = format!("{} ({})", voice.name, voice.lang);
            if voice.is_default {
                label.push_str(" -- DEFAULT");
            }
            VoiceOption {
                label,
                name: voice.name.clone(),
                lang: voice.lang.clone(),
                value: index.to_string(),
            }
        })
        .collect()
}

/// Map the selector's current value back to a voice index
///
/// Returns `None` for the placeholder, unparsable values, or indices past the
/// end of the voice list (the list can shrink on `voiceschanged`).
pub fn resolve_voice(selected: &str, voice_count: usize) -> Option<usize> {
    if selected == PLACEHOLDER_VALUE {
        return None;
    }
    selected
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < voice_count)
}
