//! Conversation layer.
//!
//! `dialogue` is the per-user finite-state controller that turns each
//! inbound text into the next prompt, menu, or result set; `format` builds
//! the outbound message shapes.

mod dialogue;
pub mod format;

pub use dialogue::{Dialogue, START_KEYWORD};
pub use format::MAX_MENU_OPTIONS;
