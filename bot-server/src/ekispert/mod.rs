//! Ekispert routing API client.
//!
//! This module provides an HTTP client for the Ekispert (駅すぱあと) JSON
//! API, which the bot uses for station lookup, operator and line listings,
//! and itinerary search.
//!
//! Key characteristics of the API:
//! - The API key travels as a `key` query parameter on every request
//! - Every response is wrapped in a `ResultSet` envelope
//! - A result that would be a list is serialized as a bare object when it
//!   has exactly one element; `types::OneOrMany` normalizes both shapes
//!   into a `Vec` before any domain logic sees them
//! - Clock times are compact 4-digit HHMM strings, dates 8-digit YYYYMMDD

mod client;
mod convert;
mod error;
mod types;

pub use client::{CourseSearchParams, EkispertClient, EkispertConfig};
pub use error::EkispertError;
pub use types::{
    CorporationDto, CourseDto, LineDto, OneOrMany, PointDto, RouteDto, RouteLineDto,
};
