//! Page element lookup

use meme_ui::{ControlSet, ElementIds};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
    HtmlImageElement, HtmlInputElement, HtmlSelectElement,
};

/// Every element the generator reads from or writes to
pub struct Page {
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    /// Off-DOM image the selected file decodes into
    pub image: HtmlImageElement,
    pub image_input: HtmlInputElement,
    pub submit_button: HtmlButtonElement,
    pub clear_button: HtmlButtonElement,
    pub read_button: HtmlButtonElement,
    pub text_top: HtmlInputElement,
    pub text_bottom: HtmlInputElement,
    pub voice_select: HtmlSelectElement,
    pub volume_input: HtmlInputElement,
    pub volume_icon: HtmlImageElement,
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

fn within<T: JsCast>(parent: &Element, selector: &str) -> Result<T, JsValue> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| {
            JsValue::from_str(&format!("No '{}' inside #{}", selector, parent.id()))
        })?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("'{}' has an unexpected type", selector)))
}

impl Page {
    /// Look up all elements named by `ids`
    pub fn lookup(document: Document, ids: &ElementIds) -> Result<Page, JsValue> {
        let canvas: HtmlCanvasElement = by_id(&document, &ids.canvas)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Canvas 2D context has an unexpected type"))?;

        let form: Element = by_id(&document, &ids.form)?;
        let button_group: Element = by_id(&document, &ids.button_group)?;
        let volume_group: Element = by_id(&document, &ids.volume_group)?;

        Ok(Page {
            canvas,
            ctx,
            image: HtmlImageElement::new()?,
            image_input: by_id(&document, &ids.image_input)?,
            submit_button: within(&form, "button[type=submit]")?,
            clear_button: within(&button_group, "button[type=reset]")?,
            read_button: within(&button_group, "button[type=button]")?,
            text_top: by_id(&document, &ids.text_top)?,
            text_bottom: by_id(&document, &ids.text_bottom)?,
            voice_select: by_id(&document, &ids.voice_select)?,
            volume_input: within(&volume_group, "input[type=range]")?,
            volume_icon: within(&volume_group, "img")?,
            document,
        })
    }

    /// Current canvas size in pixels
    pub fn surface(&self) -> meme_core::Size {
        meme_core::Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Apply enabled flags to the controls
    pub fn apply_controls(&self, controls: &ControlSet) {
        self.submit_button.set_disabled(!controls.submit);
        self.clear_button.set_disabled(!controls.clear);
        self.read_button.set_disabled(!controls.read);
        self.voice_select.set_disabled(!controls.voice_select);
        self.text_top.set_disabled(!controls.text_inputs);
        self.text_bottom.set_disabled(!controls.text_inputs);
        self.image_input.set_disabled(!controls.image_input);
    }

    /// Empty the caption and file inputs
    pub fn reset_inputs(&self) {
        self.text_top.set_value("");
        self.text_bottom.set_value("");
        self.image_input.set_value("");
    }
}
