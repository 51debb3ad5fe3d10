//! The owned document model
//!
//! A [`Document`] is the single owner of the parsed layout tree. Scene
//! nodes address into it with [`KeyPath`]s and every mutation goes
//! through the document, so the textual form and the node tree can
//! never disagree about who holds the data.

mod control;
mod path;

pub use control::{ControlView, Entry};
pub use path::{KeyPath, Segment};

use indexmap::IndexMap;

use crate::error::ParseError;
use crate::layout::{self, LayoutContext, Point, Size};
use crate::parser::{self, Value};

/// An ordered, mutable layout document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse source text into a document
    ///
    /// Accepts the relaxed input dialect (comments, trailing commas,
    /// single quotes, unquoted keys) and strips a leading BOM.
    pub fn parse(text: &str) -> Result<Document, Vec<ParseError>> {
        Ok(Document {
            root: parser::parse(text)?,
        })
    }

    /// An empty document: a mapping with no entries
    pub fn empty() -> Document {
        Document {
            root: Value::Object(IndexMap::new()),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Serialize to canonical text: strict JSON, 2-space indent, key
    /// order preserved, no BOM
    pub fn to_text(&self) -> String {
        parser::print(&self.root)
    }

    /// Value at `path`, if the path still resolves
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(k) => current.as_object()?.get(k)?,
                Segment::Index(i) => current.as_array()?.get(*i)?,
            };
        }
        Some(current)
    }

    pub fn get_mut(&mut self, path: &KeyPath) -> Option<&mut Value> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(k) => current.as_object_mut()?.get_mut(k)?,
                Segment::Index(i) => current.as_array_mut()?.get_mut(*i)?,
            };
        }
        Some(current)
    }

    /// Typed view of the control at `path`, if there is one
    pub fn control_at(&self, path: &KeyPath) -> Option<ControlView<'_>> {
        match Entry::classify(self.get(path)?) {
            Entry::Control(view) => Some(view),
            Entry::Data(_) => None,
        }
    }

    /// Resolve the control's `size` and write the normalized pixel pair
    /// back into the document
    ///
    /// Returns `None` when `path` does not name a control. The written
    /// form is always a two-element numeric array, so a later
    /// serialize/reparse cycle resolves to the same size.
    pub fn normalize_size_at(&mut self, path: &KeyPath, ctx: &LayoutContext) -> Option<Size> {
        let size = self.control_at(path)?.size(ctx);
        let map = self.get_mut(path)?.as_object_mut()?;
        map.insert(
            "size".to_string(),
            Value::Array(vec![size.width.into(), size.height.into()]),
        );
        Some(size)
    }

    /// Overwrite the control's `offset` with a pixel pair
    pub fn set_offset_at(&mut self, path: &KeyPath, offset: Point) -> Option<()> {
        self.control_at(path)?;
        let map = self.get_mut(path)?.as_object_mut()?;
        map.insert(
            "offset".to_string(),
            Value::Array(vec![offset.x.into(), offset.y.into()]),
        );
        Some(())
    }

    /// Resolved offset of the control at `path`
    pub fn offset_at(&self, path: &KeyPath) -> Point {
        self.control_at(path)
            .map(|view| view.offset())
            .unwrap_or_default()
    }

    /// Resolved size of the control at `path`
    pub fn size_at(&self, path: &KeyPath, ctx: &LayoutContext) -> Size {
        self.control_at(path)
            .map(|view| view.size(ctx))
            .unwrap_or_else(|| Size::new(layout::DEFAULT_WIDTH, layout::DEFAULT_HEIGHT))
    }
}
