//! Replaying draw plans onto a 2D canvas context

use meme_core::DrawOp;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// Execute `ops` in order
///
/// `image` is the element drawn by [`DrawOp::DrawImage`].
pub fn replay(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    ops: &[DrawOp],
) -> Result<(), JsValue> {
    for op in ops {
        match op {
            DrawOp::Clear(rect) => ctx.clear_rect(rect.x, rect.y, rect.width, rect.height),
            DrawOp::FillRect { rect, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawOp::DrawImage(placement) => {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    placement.start_x,
                    placement.start_y,
                    placement.width,
                    placement.height,
                )?;
            }
            DrawOp::SetStyle(style) => {
                ctx.set_font(&style.font);
                ctx.set_stroke_style_str(&style.stroke_color.to_css());
                ctx.set_line_width(style.line_width);
                ctx.set_fill_style_str(&style.fill_color.to_css());
                ctx.set_text_align(style.align.as_css());
            }
            DrawOp::StrokeText { text, at } => ctx.stroke_text(text, at.x, at.y)?,
            DrawOp::FillText { text, at } => ctx.fill_text(text, at.x, at.y)?,
        }
    }
    Ok(())
}
