//! Web Speech API glue

use meme_ui::{voice_options, Utterance, Voice, PLACEHOLDER_VALUE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlOptionElement, HtmlSelectElement, SpeechSynthesis, SpeechSynthesisUtterance,
    SpeechSynthesisVoice,
};

/// The window's speech synthesizer, if the browser has one
pub fn synthesizer() -> Option<SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

/// Platform voices, in platform order
pub fn platform_voices(synth: &SpeechSynthesis) -> Vec<SpeechSynthesisVoice> {
    let voices: js_sys::Array = synth.get_voices();
    voices
        .iter()
        .filter_map(|value| value.dyn_into::<SpeechSynthesisVoice>().ok())
        .collect()
}

/// Fill the voice selector with the platform voices
///
/// The placeholder option is dropped once voices are known. Options are
/// appended, matching the browser's `voiceschanged` semantics.
pub fn populate_voices(
    document: &Document,
    select: &HtmlSelectElement,
    synth: &SpeechSynthesis,
) -> Result<usize, JsValue> {
    if let Some(placeholder) =
        select.query_selector(&format!("option[value={}]", PLACEHOLDER_VALUE))?
    {
        select.remove_child(&placeholder)?;
    }

    let voices: Vec<Voice> = platform_voices(synth)
        .iter()
        .map(|voice| Voice {
            name: voice.name(),
            lang: voice.lang(),
            is_default: voice.default(),
        })
        .collect();

    for option in voice_options(&voices) {
        let element = document
            .create_element("option")?
            .dyn_into::<HtmlOptionElement>()
            .map_err(|_| JsValue::from_str("Failed to create <option>"))?;
        element.set_text_content(Some(&option.label));
        element.set_attribute("data-lang", &option.lang)?;
        element.set_attribute("data-name", &option.name)?;
        element.set_value(&option.value);
        select.append_child(&element)?;
    }

    log::info!("populated {} voices", voices.len());
    Ok(voices.len())
}

/// Speak `utterance`
pub fn speak(synth: &SpeechSynthesis, utterance: &Utterance) -> Result<(), JsValue> {
    let spoken = SpeechSynthesisUtterance::new_with_text(&utterance.text)?;
    if let Some(index) = utterance.voice_index {
        let voices = platform_voices(synth);
        spoken.set_voice(voices.get(index));
    }
    spoken.set_volume(utterance.volume as f32);
    synth.speak(&spoken);
    Ok(())
}
