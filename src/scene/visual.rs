//! Asset-or-label visual decision
//!
//! Rasterization belongs to the rendering collaborator; the model only
//! decides, per control, whether an image asset backs it or a fallback
//! label does, and how the label scales to fit the box. The two are
//! mutually exclusive.

use std::path::PathBuf;

use crate::assets::TextureStore;
use crate::layout::Size;

/// Estimated glyph advance for label fitting, in pixels
const GLYPH_WIDTH: f64 = 7.0;

/// Estimated line height for label fitting, in pixels
const LINE_HEIGHT: f64 = 14.0;

/// Fraction of the fitted scale kept as inset margin
const INSET: f64 = 0.8;

/// What a control renders as
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// A resolvable texture, stretched to the control's box
    Texture(PathBuf),
    /// Fallback: the control's key, scaled to fit the box
    Label(Label),
}

/// A placeholder label and its fitted scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub scale: f64,
}

impl Visual {
    /// Decide the visual for a control
    ///
    /// A texture wins only when its reference resolves to an existing
    /// file; otherwise the key becomes a label scaled uniformly to the
    /// box with a small inset.
    pub fn decide(key: &str, texture: Option<&str>, size: Size, store: &TextureStore) -> Visual {
        if let Some(path) = texture.and_then(|t| store.locate(t)) {
            return Visual::Texture(path);
        }
        let text = format!("#{}", key);
        let text_width = (text.chars().count() as f64 * GLYPH_WIDTH).max(1.0);
        let scale_x = f64::from(size.width) / text_width;
        let scale_y = f64::from(size.height) / LINE_HEIGHT;
        Visual::Label(Label {
            text,
            scale: scale_x.min(scale_y) * INSET,
        })
    }

    pub fn texture_path(&self) -> Option<&std::path::Path> {
        match self {
            Visual::Texture(path) => Some(path),
            Visual::Label(_) => None,
        }
    }
}
