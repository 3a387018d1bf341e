//! Draft state for the meme editor on the create page.
//!
//! DESIGN
//! ======
//! Captions are kept in reference-canvas coordinates (800x450); the
//! `MemePicture` preview scales them for display, and they are uploaded
//! unscaled.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::Caption;
use crate::util::caption_layout::{REF_HEIGHT, REF_WIDTH};

/// A picture picked for upload plus its object-URL preview.
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pub url: String,
    pub name: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub captions: Vec<Caption>,
    pub description: String,
    pub submitting: bool,
}

impl EditorState {
    /// Append a placeholder caption. `unit_x`/`unit_y` in `[0, 1)` pick its
    /// spot inside the top-left quarter of the reference canvas.
    pub fn add_caption(&mut self, unit_x: f64, unit_y: f64) {
        let n = self.captions.len() + 1;
        self.captions.push(Caption {
            content: format!("New caption {n}"),
            x: unit_x.clamp(0.0, 1.0) * (REF_WIDTH / 2.0),
            y: unit_y.clamp(0.0, 1.0) * (REF_HEIGHT / 2.0),
        });
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_caption_content(&mut self, index: usize, content: String) -> bool {
        match self.captions.get_mut(index) {
            Some(caption) => {
                caption.content = content;
                true
            }
            None => false,
        }
    }

    /// Returns the removed caption, or `None` when `index` is out of range.
    pub fn delete_caption(&mut self, index: usize) -> Option<Caption> {
        (index < self.captions.len()).then(|| self.captions.remove(index))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A value in `[0, 1)` for caption placement.
pub fn random_unit() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.5
    }
}

/// Check that a meme can be submitted.
///
/// # Errors
///
/// Returns the message to show when no picture has been chosen.
pub fn validate_submission(picture: Option<&Picture>) -> Result<&Picture, &'static str> {
    picture.ok_or("Pick a picture first.")
}
