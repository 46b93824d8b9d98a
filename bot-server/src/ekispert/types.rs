//! Ekispert API response DTOs.
//!
//! These types map directly to the Ekispert JSON API responses. Element
//! names are capitalized, attribute names are lowercase, and any element
//! with a cardinality of one is serialized as a bare object instead of a
//! single-element array; `OneOrMany` absorbs that so the client always
//! hands out plain `Vec`s.

use serde::Deserialize;

/// A value the API serializes as either one object or an array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalize into an ordered sequence.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// Response from `/station`.
#[derive(Debug, Deserialize)]
pub struct StationResponse {
    #[serde(rename = "ResultSet")]
    pub result_set: StationResultSet,
}

#[derive(Debug, Deserialize)]
pub struct StationResultSet {
    #[serde(rename = "Point")]
    pub point: Option<OneOrMany<PointDto>>,
}

/// One station hit from a name lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PointDto {
    #[serde(rename = "Station")]
    pub station: PointStationDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointStationDto {
    /// Canonical station code.
    pub code: String,

    #[serde(rename = "Name")]
    pub name: Option<String>,
}

/// Response from `/corporation`.
#[derive(Debug, Deserialize)]
pub struct CorporationResponse {
    #[serde(rename = "ResultSet")]
    pub result_set: CorporationResultSet,
}

#[derive(Debug, Deserialize)]
pub struct CorporationResultSet {
    #[serde(rename = "Corporation")]
    pub corporation: Option<OneOrMany<CorporationDto>>,
}

/// A railway company.
#[derive(Debug, Clone, Deserialize)]
pub struct CorporationDto {
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,
}

/// Response from `/railway`.
#[derive(Debug, Deserialize)]
pub struct RailwayResponse {
    #[serde(rename = "ResultSet")]
    pub result_set: RailwayResultSet,
}

#[derive(Debug, Deserialize)]
pub struct RailwayResultSet {
    #[serde(rename = "Line")]
    pub line: Option<OneOrMany<LineDto>>,
}

/// A named line belonging to one corporation.
#[derive(Debug, Clone, Deserialize)]
pub struct LineDto {
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,
}

/// Response from `/search/course/extreme`.
///
/// `ResultSet` is required: a response without it is a protocol failure,
/// while a present `ResultSet` with no `Course` is a valid zero-result
/// search.
#[derive(Debug, Deserialize)]
pub struct CourseResponse {
    #[serde(rename = "ResultSet")]
    pub result_set: CourseResultSet,
}

#[derive(Debug, Deserialize)]
pub struct CourseResultSet {
    #[serde(rename = "Course")]
    pub course: Option<OneOrMany<CourseDto>>,
}

/// One itinerary candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDto {
    #[serde(rename = "Route")]
    pub route: RouteDto,

    #[serde(rename = "Price")]
    pub price: Option<PriceDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    #[serde(rename = "Line")]
    pub line: OneOrMany<RouteLineDto>,

    #[serde(rename = "Departure")]
    pub departure: TerminalDto,

    #[serde(rename = "Arrival")]
    pub arrival: TerminalDto,

    /// Total minutes on board, as a decimal string.
    #[serde(rename = "timeOnBoard")]
    pub time_on_board: Option<String>,
}

/// One ride within a course route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLineDto {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Corporation")]
    pub corporation: Option<CorporationRefDto>,

    /// Stations touched by this ride, boarding first.
    #[serde(rename = "Station")]
    pub station: OneOrMany<NamedStationDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorporationRefDto {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Departure or arrival terminal of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalDto {
    #[serde(rename = "Station")]
    pub station: NamedStationDto,

    /// Compact HHMM clock time.
    #[serde(rename = "Time")]
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedStationDto {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceDto {
    #[serde(rename = "Fare")]
    pub fare: Option<String>,
}
