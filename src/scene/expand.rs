//! Document-to-forest expansion
//!
//! Walks the document looking for control entries and materializes each
//! as a [`ControlNode`]. Traversal is depth-first, parent before
//! children, in document insertion order; the arena's node order is
//! therefore also the render order.

use crate::assets::TextureStore;
use crate::document::{Document, KeyPath};
use crate::layout::{self, LayoutContext};
use crate::parser::Value;

use super::node::{ControlNode, NodeId};
use super::visual::Visual;
use super::Scene;

impl Scene {
    /// Expand a document into a positioned forest
    ///
    /// The root mapping's `controls` entry is walked first; remaining
    /// top-level control entries follow in document order. Every
    /// materialized control has its `size` normalized in the document,
    /// so the persisted form carries resolved pixels.
    pub fn build(doc: &mut Document, ctx: &LayoutContext, textures: &TextureStore) -> Scene {
        let mut scene = Scene {
            nodes: Vec::new(),
            roots: Vec::new(),
        };

        let top_keys: Vec<String> = doc
            .root()
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();

        if top_keys.iter().any(|k| k == "controls") {
            scene.expand_value(doc, ctx, textures, KeyPath::root().child("controls"), None);
        }
        for key in top_keys {
            if key == "controls" {
                continue;
            }
            let path = KeyPath::root().child(&key);
            if doc.control_at(&path).is_some() {
                scene.expand_control(doc, ctx, textures, path, key, None);
            }
        }
        scene
    }

    /// Walk a `controls` value: a mapping of named controls, or a
    /// sequence of such mappings (walked positionally)
    fn expand_value(
        &mut self,
        doc: &mut Document,
        ctx: &LayoutContext,
        textures: &TextureStore,
        path: KeyPath,
        parent: Option<NodeId>,
    ) {
        enum Shape {
            Map(Vec<String>),
            Seq(usize),
            Other,
        }
        let shape = match doc.get(&path) {
            Some(Value::Object(map)) => Shape::Map(map.keys().cloned().collect()),
            Some(Value::Array(seq)) => Shape::Seq(seq.len()),
            _ => Shape::Other,
        };
        match shape {
            Shape::Map(keys) => {
                for key in keys {
                    let child = path.child(&key);
                    if doc.control_at(&child).is_some() {
                        self.expand_control(doc, ctx, textures, child, key, parent);
                    }
                }
            }
            Shape::Seq(len) => {
                for i in 0..len {
                    self.expand_value(doc, ctx, textures, path.index(i), parent);
                }
            }
            Shape::Other => {}
        }
    }

    fn expand_control(
        &mut self,
        doc: &mut Document,
        ctx: &LayoutContext,
        textures: &TextureStore,
        path: KeyPath,
        key: String,
        parent: Option<NodeId>,
    ) {
        let Some(size) = doc.normalize_size_at(&path, ctx) else {
            return;
        };
        let Some(view) = doc.control_at(&path) else {
            return;
        };
        let position =
            layout::absolute_position(view.anchor_from(), view.anchor_to(), ctx, size, view.offset());
        let visual = Visual::decide(&key, view.texture(), size, textures);
        let has_children = view.controls().is_some();

        let id = NodeId(self.nodes.len());
        self.nodes.push(ControlNode {
            key,
            path: path.clone(),
            size,
            position,
            visual,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent_id) => self.nodes[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }

        if has_children {
            self.expand_value(doc, ctx, textures, path.child("controls"), Some(id));
        }
    }
}
