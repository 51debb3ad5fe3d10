//! JsonUI layout editor engine
//!
//! The core of an editor for JsonUI, the JSON-based layout format used
//! by a game's UI framework. A layout is a tree of named controls, each
//! positioned by an anchor pair, a pixel/percentage size, and a pixel
//! offset. This crate resolves those specs to absolute pixel positions,
//! inverts drags back into offsets, and keeps the structured document
//! and its text form synchronized without feedback loops.
//!
//! # Example
//!
//! ```
//! use jsonui_editor::{LayoutContext, Point, SyncCoordinator, TextureStore};
//!
//! let mut sync = SyncCoordinator::new(LayoutContext::default(), TextureStore::default());
//! sync.load_text(r#"{
//!     // relaxed input is fine
//!     "controls": {
//!         "btn": {"type": "button", "size": [100, 40], "anchor_to": "center"},
//!     },
//! }"#).unwrap();
//!
//! let id = sync.scene().find_by_key("btn").unwrap();
//! assert_eq!(sync.scene().absolute_position(id), Point::new(910, 520));
//!
//! // Dragging stores an exact inverse offset and regenerates the text
//! let regen = sync.reposition(id, Point::new(300, 200)).unwrap();
//! assert!(regen.text.contains("\"offset\""));
//! ```

pub mod assets;
pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod parser;
pub mod scene;
pub mod session;
pub mod sync;

pub use assets::TextureStore;
pub use config::EditorConfig;
pub use document::{Document, KeyPath};
pub use error::ParseError;
pub use layout::{Anchor, LayoutContext, Point, Size};
pub use parser::Value;
pub use scene::{ControlNode, NodeId, Scene};
pub use session::Session;
pub use sync::{SyncCoordinator, TextEvent};
