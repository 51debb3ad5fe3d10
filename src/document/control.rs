//! Control classification and typed field access

use indexmap::IndexMap;

use crate::layout::{self, Anchor, LayoutContext, Point, Size};
use crate::parser::Value;

/// A document entry is either a control spec or plain data
///
/// Presence of a `type` key marks a mapping entry as a control; every
/// other value, including mappings without `type`, is opaque data the
/// layout engine never touches.
#[derive(Debug)]
pub enum Entry<'a> {
    Control(ControlView<'a>),
    Data(&'a Value),
}

impl<'a> Entry<'a> {
    pub fn classify(value: &'a Value) -> Entry<'a> {
        match value.as_object() {
            Some(map) if map.contains_key("type") => Entry::Control(ControlView { map }),
            _ => Entry::Data(value),
        }
    }
}

/// Read-only typed view over a control's mapping
///
/// Every accessor fails soft, mirroring the layout engine: a missing or
/// mistyped field yields its documented default rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct ControlView<'a> {
    map: &'a IndexMap<String, Value>,
}

impl<'a> ControlView<'a> {
    pub fn control_type(&self) -> Option<&'a str> {
        self.map.get("type").and_then(Value::as_str)
    }

    pub fn anchor_from(&self) -> Anchor {
        Anchor::parse(
            self.map
                .get("anchor_from")
                .and_then(Value::as_str)
                .unwrap_or("top_left"),
        )
    }

    pub fn anchor_to(&self) -> Anchor {
        Anchor::parse(
            self.map
                .get("anchor_to")
                .and_then(Value::as_str)
                .unwrap_or("top_left"),
        )
    }

    /// The `size` field as stored, before normalization
    pub fn size_raw(&self) -> Option<&'a Value> {
        self.map.get("size")
    }

    /// Resolved pixel size
    pub fn size(&self, ctx: &LayoutContext) -> Size {
        layout::parse_size(self.map.get("size"), ctx)
    }

    /// Resolved pixel offset
    pub fn offset(&self) -> Point {
        layout::parse_offset(self.map.get("offset"))
    }

    pub fn texture(&self) -> Option<&'a str> {
        self.map.get("texture").and_then(Value::as_str)
    }

    /// Nested child document, if any
    pub fn controls(&self) -> Option<&'a Value> {
        self.map.get("controls")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn control(src: &str) -> Value {
        parse(src).unwrap()
    }

    #[test]
    fn test_classify_requires_type_key() {
        let val = control(r#"{"type": "button"}"#);
        assert!(matches!(Entry::classify(&val), Entry::Control(_)));

        let val = control(r#"{"size": [10, 10]}"#);
        assert!(matches!(Entry::classify(&val), Entry::Data(_)));

        let val = control("[1, 2]");
        assert!(matches!(Entry::classify(&val), Entry::Data(_)));
    }

    #[test]
    fn test_type_presence_alone_marks_a_control() {
        // Any value under "type" qualifies, not just strings
        let val = control(r#"{"type": 7}"#);
        let Entry::Control(view) = Entry::classify(&val) else {
            panic!("expected control");
        };
        assert_eq!(view.control_type(), None);
    }

    #[test]
    fn test_anchor_defaults() {
        let val = control(r#"{"type": "panel"}"#);
        let Entry::Control(view) = Entry::classify(&val) else {
            panic!("expected control");
        };
        assert_eq!(view.anchor_from(), Anchor::TopLeft);
        assert_eq!(view.anchor_to(), Anchor::TopLeft);
    }

    #[test]
    fn test_typed_accessors() {
        let val = control(
            r#"{
                "type": "image",
                "anchor_to": "center",
                "size": ["50%", 40],
                "offset": [5, "-3px"],
                "texture": "ui/button"
            }"#,
        );
        let Entry::Control(view) = Entry::classify(&val) else {
            panic!("expected control");
        };
        let ctx = LayoutContext::default();
        assert_eq!(view.control_type(), Some("image"));
        assert_eq!(view.anchor_to(), Anchor::Center);
        assert_eq!(view.size(&ctx), Size::new(960, 40));
        assert_eq!(view.offset(), Point::new(5, -3));
        assert_eq!(view.texture(), Some("ui/button"));
        assert!(view.controls().is_none());
    }
}
