//! Route search, filter, and ranking engine.
//!
//! Takes the query assembled by the conversation, resolves both endpoints,
//! searches the routing API, and keeps only candidates that use the chosen
//! operator and line and arrive within the requested window, ranked by
//! time spent on board (longest first). The bot's audience wants to ride
//! trains, not to arrive quickly.

mod config;
mod rank;
mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PlannerConfig;
pub use rank::{filter_courses, rank_courses};
pub use search::{Planner, RouteProvider, SearchError, TravelQuery};
