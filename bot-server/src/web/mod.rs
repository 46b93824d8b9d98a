//! Web layer for the rail-fan route bot.
//!
//! One webhook endpoint plus a health check; everything interesting
//! happens in the conversation layer.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
