//! Planner configuration.

/// How many ranked courses the bot shows. The silent truncation is policy,
/// not accident, so it lives here where tests can assert on it.
pub const MAX_RESULTS: usize = 3;

/// How many raw candidates to request from the routing API per search.
pub const RAW_CANDIDATE_COUNT: u8 = 10;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of ranked courses to return.
    pub max_results: usize,

    /// Number of raw candidates requested from the API.
    pub candidate_count: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            candidate_count: RAW_CANDIDATE_COUNT,
        }
    }
}
