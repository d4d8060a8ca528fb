//! WASM bindings for memegen
//!
//! This crate provides JavaScript-friendly API for:
//! - Fitting an image into a canvas (`fitImage`)
//! - Wiring the meme generator page (image input, captions, read aloud, reset)
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { MemeGenerator, fitImage } from 'meme-wasm';
//!
//! await init();
//!
//! // Bind to the stock page element ids
//! const generator = MemeGenerator.attach();
//!
//! // Or override parts of the configuration
//! // const generator = MemeGenerator.attach(JSON.stringify({ fitPolicy: "contain" }));
//!
//! // Pure placement helper
//! const { width, height, startX, startY } = fitImage(400, 400, 1920, 1080);
//! ```

mod canvas;
mod logger;
mod page;
mod speech;

use meme_core::{compute_placement, PlacementRect, Size};
use meme_ui::{parse_config, MemeConfig, MemeSession};
use page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

// Initialize panic hook and console logging for the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::install();
}

fn placement(
    surface_width: f64,
    surface_height: f64,
    image_width: f64,
    image_height: f64,
) -> Result<PlacementRect, String> {
    compute_placement(
        Size::new(surface_width, surface_height),
        Size::new(image_width, image_height),
    )
    .map_err(|e| e.to_string())
}

/// Compute where an image is drawn on a canvas
///
/// @param surfaceWidth - Canvas width in pixels
/// @param surfaceHeight - Canvas height in pixels
/// @param imageWidth - Natural image width
/// @param imageHeight - Natural image height
/// @returns `{ width, height, startX, startY }`
#[wasm_bindgen(js_name = fitImage)]
pub fn fit_image(
    surface_width: f64,
    surface_height: f64,
    image_width: f64,
    image_height: f64,
) -> Result<JsValue, JsValue> {
    let rect = placement(surface_width, surface_height, image_width, image_height)
        .map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&rect)?)
}

/// Default configuration as JSON
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsValue> {
    MemeConfig::default()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Change the console log level
///
/// @param level - `off`, `error`, `warn`, `info`, `debug` or `trace`
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    logger::set_level(level).map_err(|e| JsValue::from_str(&e))
}

struct App {
    page: Page,
    session: MemeSession,
}

type Shared = Rc<RefCell<App>>;

impl App {
    fn sync_controls(&self) {
        self.page.apply_controls(&self.session.controls());
    }

    fn on_image_selected(&mut self) -> Result<(), JsValue> {
        let files = match self.page.image_input.files() {
            Some(files) => files,
            None => return Ok(()),
        };
        let file = match files.get(0) {
            Some(file) => file,
            None => return Ok(()),
        };

        self.page.image.set_alt(&self.page.image_input.name());
        let url = web_sys::Url::create_object_url_with_blob(&file)?;
        self.page.image.set_src(&url);
        self.session.image_selected();
        log::info!("loading {}", file.name());
        Ok(())
    }

    fn on_image_loaded(&mut self) -> Result<(), JsValue> {
        let image = Size::new(
            self.page.image.natural_width() as f64,
            self.page.image.natural_height() as f64,
        );
        let ops = self
            .session
            .image_loaded(image)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        canvas::replay(&self.page.ctx, &self.page.image, &ops)?;

        // The object URL is only needed until the pixels are decoded
        let src = self.page.image.src();
        if src.starts_with("blob:") {
            web_sys::Url::revoke_object_url(&src)?;
        }
        Ok(())
    }

    fn on_submit(&mut self) -> Result<(), JsValue> {
        let top = self.page.text_top.value();
        let bottom = self.page.text_bottom.value();
        let ops = self
            .session
            .submit(&top, &bottom)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        canvas::replay(&self.page.ctx, &self.page.image, &ops)
    }

    fn on_clear(&mut self) -> Result<(), JsValue> {
        let ops = self
            .session
            .clear()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        canvas::replay(&self.page.ctx, &self.page.image, &ops)?;
        self.page.reset_inputs();
        Ok(())
    }

    fn on_read(&self) -> Result<(), JsValue> {
        let synth = match speech::synthesizer() {
            Some(synth) => synth,
            None => {
                log::warn!("speech synthesis unavailable");
                return Ok(());
            }
        };
        let selected = self.page.voice_select.value();
        log::info!("read text called, voice {}", selected);

        let utterance = self.session.utterance(
            &self.page.text_top.value(),
            &self.page.text_bottom.value(),
            &selected,
            speech::platform_voices(&synth).len(),
            self.page.volume_input.value_as_number(),
        );
        speech::speak(&synth, &utterance)
    }

    fn on_volume_changed(&self) {
        let (src, alt) = self
            .session
            .volume_icon(self.page.volume_input.value_as_number());
        self.page.volume_icon.set_src(&src);
        self.page.volume_icon.set_alt(&alt);
    }

    fn populate_voices(&self) -> Result<(), JsValue> {
        if let Some(synth) = speech::synthesizer() {
            speech::populate_voices(&self.page.document, &self.page.voice_select, &synth)?;
        }
        Ok(())
    }
}

/// Run `handler` against the shared app, then refresh the controls
fn dispatch<F>(app: &Shared, name: &str, handler: F)
where
    F: FnOnce(&mut App) -> Result<(), JsValue>,
{
    let mut app = app.borrow_mut();
    if let Err(err) = handler(&mut *app) {
        log::error!("{} failed: {:?}", name, err);
    }
    app.sync_controls();
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Meme generator bound to a page
#[wasm_bindgen]
pub struct MemeGenerator {
    app: Shared,
}

impl MemeGenerator {
    fn bind(app: &Shared) -> Result<(), JsValue> {
        let shared = app.borrow();
        let page = &shared.page;

        let handle = app.clone();
        listen(&page.image_input, "change", move |_| {
            dispatch(&handle, "image selection", App::on_image_selected)
        })?;

        let handle = app.clone();
        listen(&page.image, "load", move |_| {
            dispatch(&handle, "image load", App::on_image_loaded)
        })?;

        let handle = app.clone();
        listen(&page.submit_button, "click", move |event| {
            event.prevent_default();
            dispatch(&handle, "submit", App::on_submit)
        })?;

        let handle = app.clone();
        listen(&page.clear_button, "click", move |_| {
            dispatch(&handle, "clear", App::on_clear)
        })?;

        let handle = app.clone();
        listen(&page.read_button, "click", move |_| {
            dispatch(&handle, "read aloud", |app| app.on_read())
        })?;

        let handle = app.clone();
        listen(&page.volume_input, "change", move |_| {
            handle.borrow().on_volume_changed()
        })?;

        if let Some(synth) = speech::synthesizer() {
            let handle = app.clone();
            let on_voices_changed = Closure::<dyn FnMut()>::new(move || {
                if let Err(err) = handle.borrow().populate_voices() {
                    log::error!("voice population failed: {:?}", err);
                }
            });
            synth.set_onvoiceschanged(Some(on_voices_changed.as_ref().unchecked_ref()));
            on_voices_changed.forget();
        }

        Ok(())
    }
}

#[wasm_bindgen]
impl MemeGenerator {
    /// Bind to the page's elements and start handling events
    ///
    /// @param configJson - Optional JSON configuration; missing fields use defaults
    /// @returns MemeGenerator instance
    pub fn attach(config_json: Option<String>) -> Result<MemeGenerator, JsValue> {
        let config = match config_json {
            Some(json) => parse_config(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => MemeConfig::default(),
        };

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let page = Page::lookup(document, &config.elements)?;
        let session = MemeSession::new(config, page.surface())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app: Shared = Rc::new(RefCell::new(App { page, session }));
        Self::bind(&app)?;

        {
            let app = app.borrow();
            app.sync_controls();
            app.populate_voices()?;
        }
        log::info!("meme generator attached");
        Ok(MemeGenerator { app })
    }

    /// Current UI state
    ///
    /// @returns `{ hasImage, isSubmitted }`
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.app.borrow().session.state())?)
    }

    /// Enabled flag of every control
    ///
    /// @returns `{ submit, clear, read, voiceSelect, textInputs, imageInput }`
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.app.borrow().session.controls())?)
    }

    /// Active configuration as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.app
            .borrow()
            .session
            .config()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_placement() {
        let rect = placement(400.0, 300.0, 100.0, 200.0).unwrap();
        assert_eq!(rect.width, 150.0);
        assert_eq!(rect.start_x, 125.0);
    }

    #[wasm_bindgen_test]
    fn test_placement_error_message() {
        let err = placement(400.0, 300.0, 0.0, 200.0).unwrap_err();
        assert!(err.contains("imageWidth"));
    }

    #[wasm_bindgen_test]
    fn test_set_log_level_rejects_unknown_name() {
        assert!(set_log_level("chatty").is_err());
        assert!(set_log_level("warn").is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        set_log_level("info").unwrap();
    }
}
