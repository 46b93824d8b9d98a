//! Ekispert HTTP client.
//!
//! Provides async methods for station lookup, operator and line listings,
//! and itinerary search. There is no retry and no caching: station codes
//! are re-resolved for every search.

use serde::de::DeserializeOwned;

use crate::domain::{Corporation, Course, Line, Station, StationCode};

use super::convert::convert_course;
use super::error::EkispertError;
use super::types::{
    CorporationResponse, CourseResponse, OneOrMany, RailwayResponse, StationResponse,
};

/// Default base URL for the Ekispert JSON API.
const DEFAULT_BASE_URL: &str = "https://api.ekispert.jp/v1/json";

/// Configuration for the Ekispert client.
#[derive(Debug, Clone)]
pub struct EkispertConfig {
    /// API key, sent as the `key` query parameter on every request
    pub api_key: String,
    /// Base URL for the API (defaults to production Ekispert)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EkispertConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Parameters for an itinerary search.
///
/// Air travel, high-speed rail, and limited-express services are excluded
/// by construction; the whole point of the bot is exhaustive ordinary-rail
/// travel.
#[derive(Debug, Clone)]
pub struct CourseSearchParams {
    pub from: StationCode,
    pub to: StationCode,

    /// Compact 8-digit YYYYMMDD date.
    pub date: String,

    /// Compact 4-digit HHMM departure time.
    pub time: String,

    /// How many raw candidates to request.
    pub count: u8,
}

/// Ekispert API client.
#[derive(Debug, Clone)]
pub struct EkispertClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl EkispertClient {
    /// Create a new Ekispert client with the given configuration.
    pub fn new(config: EkispertConfig) -> Result<Self, EkispertError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// Issue a GET to `path` with the API key and the given parameters,
    /// decoding the JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, EkispertError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(EkispertError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EkispertError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| EkispertError::Json {
            message: e.to_string(),
        })
    }

    /// Resolve a station name to its canonical code.
    ///
    /// The first hit wins; there is no disambiguation. Fails with
    /// `StationNotFound` when the lookup returns zero matches.
    pub async fn find_station(&self, name: &str) -> Result<Station, EkispertError> {
        let response: StationResponse = self
            .get_json("/station", &[("name", name), ("type", "train")])
            .await?;

        let points = response
            .result_set
            .point
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        let first = points
            .into_iter()
            .next()
            .ok_or_else(|| EkispertError::StationNotFound(name.to_string()))?;

        Ok(Station {
            code: StationCode::new(first.station.code),
            name: first.station.name.unwrap_or_else(|| name.to_string()),
        })
    }

    /// List all railway companies.
    pub async fn corporations(&self) -> Result<Vec<Corporation>, EkispertError> {
        let response: CorporationResponse =
            self.get_json("/corporation", &[("type", "railway")]).await?;

        let corporations = response
            .result_set
            .corporation
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        Ok(corporations
            .into_iter()
            .map(|c| Corporation {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// List the lines of the named railway company.
    ///
    /// The company is chosen by exact name match against the corporation
    /// listing, because the conversation carries the user's menu choice as
    /// a display name, not an id.
    pub async fn lines(&self, corporation_name: &str) -> Result<Vec<Line>, EkispertError> {
        let corporations = self.corporations().await?;

        let corporation = corporations
            .into_iter()
            .find(|c| c.name == corporation_name)
            .ok_or_else(|| EkispertError::CorporationNotFound(corporation_name.to_string()))?;

        let response: RailwayResponse = self
            .get_json("/railway", &[("corporationId", corporation.id.as_str())])
            .await?;

        let lines = response
            .result_set
            .line
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        Ok(lines
            .into_iter()
            .map(|l| Line {
                id: l.id,
                name: l.name,
            })
            .collect())
    }

    /// Search itineraries between two station codes.
    ///
    /// Returns raw candidates in the API's own time-sorted order. An empty
    /// list is a valid zero-result outcome; a response without a
    /// `ResultSet` fails as a JSON error.
    pub async fn search_courses(
        &self,
        params: &CourseSearchParams,
    ) -> Result<Vec<Course>, EkispertError> {
        let count = params.count.to_string();

        let response: CourseResponse = self
            .get_json(
                "/search/course/extreme",
                &[
                    ("from", params.from.as_str()),
                    ("to", params.to.as_str()),
                    ("date", params.date.as_str()),
                    ("time", params.time.as_str()),
                    ("searchType", "departure"),
                    ("plane", "false"),
                    ("shinkansen", "false"),
                    ("limitedExpress", "false"),
                    ("sort", "time"),
                    ("count", count.as_str()),
                ],
            )
            .await?;

        let courses = response
            .result_set
            .course
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        Ok(courses.into_iter().map(convert_course).collect())
    }
}
