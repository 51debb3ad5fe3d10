//! Arena-backed control nodes

use crate::document::KeyPath;
use crate::layout::{Point, Size};

use super::visual::Visual;

/// Handle to a node in a [`Scene`](super::Scene) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// One positioned control
///
/// Nodes never own document data; `path` addresses the spec inside the
/// owning [`Document`](crate::document::Document), and parent/child
/// relations are arena indices, so the tree carries no reference
/// cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlNode {
    /// Name of the control in its parent mapping
    pub key: String,
    /// Address of the spec in the document
    pub path: KeyPath,
    /// Normalized pixel size
    pub size: Size,
    /// Position relative to the parent node (canvas for roots)
    pub position: Point,
    /// What the rendering collaborator should draw
    pub visual: Visual,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}
