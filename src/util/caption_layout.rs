//! Responsive caption geometry for meme pictures.
//!
//! Captions are authored against a fixed 800x450 reference canvas. When a meme
//! renders at some other width, offsets, container height and font size all
//! scale by the same ratio so the design keeps its proportions.

#[cfg(test)]
#[path = "caption_layout_test.rs"]
mod caption_layout_test;

use crate::net::types::Caption;

pub const REF_WIDTH: f64 = 800.0;
pub const REF_HEIGHT: f64 = 450.0;
pub const REF_FONT_SIZE: f64 = 36.0;

/// Pixel geometry for one rendering of a meme.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledLayout {
    pub height: f64,
    pub font_size: f64,
    pub captions: Vec<Caption>,
}

/// Ratio between the rendered width and the reference width.
///
/// An unmeasured surface (`0`, or `NaN`) falls back to `1` so the meme renders
/// at reference size instead of collapsing.
pub fn ratio_for_width(render_width: f64) -> f64 {
    let ratio = render_width / REF_WIDTH;
    if ratio == 0.0 || ratio.is_nan() { 1.0 } else { ratio }
}

/// Scale reference-canvas captions to a surface `render_width` pixels wide.
///
/// Negative or infinite widths are not sanitized; callers pass measured sizes.
pub fn scale(render_width: f64, captions: &[Caption]) -> ScaledLayout {
    let ratio = ratio_for_width(render_width);
    ScaledLayout {
        height: ratio * REF_HEIGHT,
        font_size: ratio * REF_FONT_SIZE,
        captions: captions
            .iter()
            .map(|caption| Caption {
                content: caption.content.clone(),
                x: ratio * caption.x,
                y: ratio * caption.y,
            })
            .collect(),
    }
}

/// CSS height for the picture container, never collapsing to zero.
pub fn container_height(layout: &ScaledLayout) -> f64 {
    if layout.height > 0.0 { layout.height } else { REF_HEIGHT }
}
