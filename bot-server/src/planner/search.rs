//! Route search pipeline.
//!
//! Resolves the query's endpoints, runs the itinerary search, and applies
//! the filter/rank/truncate policy. The routing source is abstracted behind
//! `RouteProvider` so the pipeline and the dialogue can be tested with
//! canned data.

use crate::domain::{
    Corporation, Course, Line, RankedCourse, Station, TravelDate, TravelTime,
};
use crate::ekispert::{CourseSearchParams, EkispertClient, EkispertError};

use super::config::PlannerConfig;
use super::rank::{filter_courses, rank_courses};

/// Error from the search pipeline.
///
/// Both variants are recoverable and end the conversation cycle with a
/// user-facing message; neither should ever abort the process.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A name the user typed or chose matched nothing upstream
    #[error("\"{0}\" not found")]
    NotFound(String),

    /// Transport or decode failure from the routing API
    #[error("routing API failure: {0}")]
    Upstream(String),
}

impl From<EkispertError> for SearchError {
    fn from(err: EkispertError) -> Self {
        match err {
            EkispertError::StationNotFound(name) | EkispertError::CorporationNotFound(name) => {
                Self::NotFound(name)
            }
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// Source of routing data.
///
/// This abstraction lets the planner and the dialogue run against an
/// in-memory mock in tests.
pub trait RouteProvider {
    /// Resolve a free-text station name to a canonical station.
    fn find_station(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Station, SearchError>> + Send;

    /// List all railway companies.
    fn corporations(&self) -> impl Future<Output = Result<Vec<Corporation>, SearchError>> + Send;

    /// List the lines of the named railway company.
    fn lines(
        &self,
        corporation_name: &str,
    ) -> impl Future<Output = Result<Vec<Line>, SearchError>> + Send;

    /// Search raw itinerary candidates.
    fn search_courses(
        &self,
        params: &CourseSearchParams,
    ) -> impl Future<Output = Result<Vec<Course>, SearchError>> + Send;
}

impl RouteProvider for EkispertClient {
    async fn find_station(&self, name: &str) -> Result<Station, SearchError> {
        EkispertClient::find_station(self, name).await.map_err(Into::into)
    }

    async fn corporations(&self) -> Result<Vec<Corporation>, SearchError> {
        EkispertClient::corporations(self).await.map_err(Into::into)
    }

    async fn lines(&self, corporation_name: &str) -> Result<Vec<Line>, SearchError> {
        EkispertClient::lines(self, corporation_name)
            .await
            .map_err(Into::into)
    }

    async fn search_courses(
        &self,
        params: &CourseSearchParams,
    ) -> Result<Vec<Course>, SearchError> {
        EkispertClient::search_courses(self, params)
            .await
            .map_err(Into::into)
    }
}

/// A complete travel query assembled by one conversation cycle.
#[derive(Debug, Clone)]
pub struct TravelQuery {
    /// Departure station name as the user typed it.
    pub departure: String,

    /// Destination station name as the user typed it.
    pub destination: String,

    pub date: TravelDate,
    pub departure_time: TravelTime,

    /// Latest acceptable arrival time.
    pub arrival_bound: TravelTime,

    /// Operator name chosen from the menu.
    pub operator: String,

    /// Line name chosen from the menu.
    pub line: String,
}

/// The route search, filter, and ranking engine.
pub struct Planner<P> {
    provider: P,
    config: PlannerConfig,
}

impl<P: RouteProvider> Planner<P> {
    pub fn new(provider: P, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// The underlying routing data source, for the listing calls the
    /// dialogue makes outside a full search.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run the full pipeline: resolve both stations, search, filter, rank,
    /// truncate, and number the survivors 1-based.
    ///
    /// An empty result is a valid outcome, distinct from `SearchError`:
    /// it means the search succeeded but nothing satisfied the filters.
    pub async fn plan(&self, query: &TravelQuery) -> Result<Vec<RankedCourse>, SearchError> {
        let from = self.provider.find_station(&query.departure).await?;
        let to = self.provider.find_station(&query.destination).await?;

        let params = CourseSearchParams {
            from: from.code,
            to: to.code,
            date: query.date.compact(),
            time: query.departure_time.compact(),
            count: self.config.candidate_count,
        };

        let candidates = self.provider.search_courses(&params).await?;

        let bound = query.arrival_bound.compact();
        let survivors =
            rank_courses(filter_courses(candidates, &query.operator, &query.line, &bound));

        Ok(survivors
            .into_iter()
            .take(self.config.max_results)
            .enumerate()
            .map(|(i, course)| RankedCourse {
                rank: i + 1,
                course,
            })
            .collect())
    }
}
