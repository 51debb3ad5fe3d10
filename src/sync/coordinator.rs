//! Bidirectional document/text synchronization

use tracing::{debug, info};

use crate::assets::TextureStore;
use crate::document::Document;
use crate::error::ParseError;
use crate::layout::{LayoutContext, Point};
use crate::scene::{NodeId, Scene};

/// Outcome of a text-change notification
#[derive(Debug)]
pub enum TextEvent {
    /// Echo of text this coordinator just published; no rebuild
    Ignored,
    /// Document replaced, scene rebuilt
    Rebuilt,
    /// Unparseable text; prior document and scene retained
    Invalid(Vec<ParseError>),
}

/// Machine-generated text the view should display
#[derive(Debug, Clone, PartialEq)]
pub struct Regenerated {
    pub text: String,
    /// Byte offset of the mutated key's first occurrence, for the
    /// view to scroll to
    pub caret: Option<usize>,
}

/// Owns the document/scene pair and arbitrates edits from both sides
///
/// Structural mutations regenerate the text exactly once and mark it
/// machine-generated; the view's echoed change notification consumes
/// the mark instead of triggering a second rebuild. User edits flow the
/// other way: parse, replace, rebuild, never regenerate.
#[derive(Debug)]
pub struct SyncCoordinator {
    doc: Document,
    scene: Scene,
    ctx: LayoutContext,
    textures: TextureStore,
    text: String,
    machine_edit: bool,
}

impl SyncCoordinator {
    pub fn new(ctx: LayoutContext, textures: TextureStore) -> Self {
        let doc = Document::empty();
        let text = doc.to_text();
        Self {
            doc,
            scene: Scene::default(),
            ctx,
            textures,
            text,
            machine_edit: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn context(&self) -> &LayoutContext {
        &self.ctx
    }

    /// The text the view currently mirrors
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the document wholesale from source text
    ///
    /// On success the scene is rebuilt and the canonical serialization
    /// (normalized sizes included) is published for the view. On
    /// failure nothing changes.
    pub fn load_text(&mut self, source: &str) -> Result<Regenerated, Vec<ParseError>> {
        let mut doc = Document::parse(source)?;
        let scene = Scene::build(&mut doc, &self.ctx, &self.textures);
        info!(controls = scene.len(), "document loaded");
        self.doc = doc;
        self.scene = scene;
        Ok(self.regenerate(None))
    }

    /// A text-change notification from the view
    pub fn notify_text_changed(&mut self, text: &str) -> TextEvent {
        if self.machine_edit {
            self.machine_edit = false;
            if text == self.text {
                debug!("ignoring echoed machine edit");
                return TextEvent::Ignored;
            }
        }
        match Document::parse(text) {
            Ok(mut doc) => {
                self.scene = Scene::build(&mut doc, &self.ctx, &self.textures);
                self.doc = doc;
                // The user's text stays in the view untouched
                self.text = text.to_string();
                TextEvent::Rebuilt
            }
            Err(errors) => {
                debug!(count = errors.len(), "text not parseable, keeping prior state");
                TextEvent::Invalid(errors)
            }
        }
    }

    /// Drag a node to an absolute canvas position
    ///
    /// Stores the inverted offset in the document and publishes exactly
    /// one regenerated text, with a caret hint at the moved key.
    pub fn reposition(&mut self, id: NodeId, target: Point) -> Option<Regenerated> {
        self.scene.reposition(&mut self.doc, &self.ctx, id, target)?;
        let key = self.scene.node(id).key.clone();
        Some(self.regenerate(Some(&key)))
    }

    /// Byte offset of the first quoted occurrence of `key` in the
    /// published text
    pub fn locate(&self, key: &str) -> Option<usize> {
        self.text.find(&format!("\"{}\"", key))
    }

    fn regenerate(&mut self, caret_key: Option<&str>) -> Regenerated {
        self.text = self.doc.to_text();
        self.machine_edit = true;
        Regenerated {
            text: self.text.clone(),
            caret: caret_key.and_then(|key| self.locate(key)),
        }
    }
}
