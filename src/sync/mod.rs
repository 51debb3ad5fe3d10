//! Document/text synchronization

mod coordinator;

pub use coordinator::{Regenerated, SyncCoordinator, TextEvent};
