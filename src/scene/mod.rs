//! The positioned scene graph
//!
//! A [`Scene`] is an arena of [`ControlNode`]s expanded from a
//! [`Document`]. Node positions are parent-relative; the arena index
//! order is the depth-first expansion order and doubles as the render
//! order for the collaborator.

mod expand;
mod node;
mod visual;

pub use node::{ControlNode, NodeId};
pub use visual::{Label, Visual};

use std::path::Path;

use tracing::debug;

use crate::document::{Document, KeyPath};
use crate::layout::{self, LayoutContext, Point, Size};

/// Arena of positioned control nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    nodes: Vec<ControlNode>,
    roots: Vec<NodeId>,
}

/// Per-node boundary record for the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntry<'a> {
    pub key: &'a str,
    /// Absolute canvas position
    pub position: Point,
    pub size: Size,
    pub texture: Option<&'a Path>,
}

impl Scene {
    pub fn node(&self, id: NodeId) -> &ControlNode {
        &self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in expansion order (depth-first, parent before children)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ControlNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Node addressing the given document path
    pub fn find(&self, path: &KeyPath) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| &node.path == path)
            .map(|(id, _)| id)
    }

    /// First node with the given key, in expansion order
    pub fn find_by_key(&self, key: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.key == key)
            .map(|(id, _)| id)
    }

    /// Absolute canvas position: the node's local position plus every
    /// ancestor's
    pub fn absolute_position(&self, id: NodeId) -> Point {
        let mut pos = self.nodes[id.0].position;
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            pos = pos + self.nodes[parent.0].position;
            current = self.nodes[parent.0].parent;
        }
        pos
    }

    /// Move a node to an absolute canvas position
    ///
    /// Only the offset absorbs the move; the anchor pair and size are
    /// reused as-is, so the stored offset is the exact inverse of the
    /// new position. Returns the new offset, or `None` when the node's
    /// path no longer names a control in the document.
    pub fn reposition(
        &mut self,
        doc: &mut Document,
        ctx: &LayoutContext,
        id: NodeId,
        target: Point,
    ) -> Option<Point> {
        let parent_abs = match self.nodes[id.0].parent {
            Some(parent) => self.absolute_position(parent),
            None => Point::default(),
        };
        let local_target = target - parent_abs;

        let path = self.nodes[id.0].path.clone();
        let size = self.nodes[id.0].size;
        let view = doc.control_at(&path)?;
        let offset = layout::offset_for(view.anchor_from(), view.anchor_to(), ctx, size, local_target);
        doc.set_offset_at(&path, offset)?;
        self.nodes[id.0].position = local_target;
        debug!(key = %self.nodes[id.0].key, ?offset, "repositioned");
        Some(offset)
    }

    /// Flat render list in expansion order
    pub fn render_list(&self) -> Vec<RenderEntry<'_>> {
        self.iter()
            .map(|(id, node)| RenderEntry {
                key: &node.key,
                position: self.absolute_position(id),
                size: node.size,
                texture: node.visual.texture_path(),
            })
            .collect()
    }
}
