//! Texture reference resolution
//!
//! Documents name textures by pack-relative reference, usually without
//! an extension. The store maps references to on-disk paths under a
//! single texture root; whether the file exists decides if a control
//! renders an image or a placeholder label.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolves texture references against a root directory
#[derive(Debug, Clone)]
pub struct TextureStore {
    root: PathBuf,
}

impl TextureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a reference would resolve to, whether or not it exists
    ///
    /// A `.png` extension is appended unless the reference already
    /// carries one.
    pub fn resolve(&self, reference: &str) -> PathBuf {
        if reference.ends_with(".png") {
            self.root.join(reference)
        } else {
            self.root.join(format!("{}.png", reference))
        }
    }

    /// Resolve a reference to an existing file
    pub fn locate(&self, reference: &str) -> Option<PathBuf> {
        let path = self.resolve(reference);
        if path.is_file() {
            Some(path)
        } else {
            debug!(reference, path = %path.display(), "texture not found");
            None
        }
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new("resource_pack/textures")
    }
}
