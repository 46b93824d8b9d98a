//! Per-user conversation sessions.
//!
//! A session is where a user stands in the question sequence plus the
//! answers collected so far. Sessions live in process memory for the
//! process lifetime; losing them on restart is accepted, the user just
//! types the start keyword again.

mod state;
mod store;

pub use state::{ConversationState, QueryFields, Session};
pub use store::SessionStore;
