//! Configuration for layout resolution

/// The canvas a document is resolved against
///
/// Every resolver and solver call takes the context explicitly; there is
/// no ambient canvas size anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Canvas width in pixels
    pub canvas_width: i32,

    /// Canvas height in pixels
    pub canvas_height: i32,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            canvas_width: 1920,
            canvas_height: 1080,
        }
    }
}

impl LayoutContext {
    /// Create a context with the default 1920x1080 canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions
    pub fn with_canvas(mut self, width: i32, height: i32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }
}
