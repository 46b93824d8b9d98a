//! Travel date and time input handling.
//!
//! Users type dates as "2023-03-08" and times as "10:00"; the routing API
//! wants compact "20230308" and "1000". Input is not rejected when it fails
//! to parse: the conversation accepts any text, and a malformed value only
//! surfaces later as an empty or failed search. The tagged representation
//! keeps that behavior explicit at the boundary instead of burying it in
//! string substitution.

use chrono::{NaiveDate, NaiveTime};

/// A user-entered travel date: either a parsed calendar date or the raw
/// text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelDate {
    Parsed(NaiveDate),
    Raw(String),
}

impl TravelDate {
    /// Parse "YYYY-MM-DD" input. Anything else is kept raw.
    pub fn parse(input: &str) -> Self {
        match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => Self::Parsed(date),
            Err(_) => Self::Raw(input.to_string()),
        }
    }

    /// Compact 8-digit YYYYMMDD form for the routing API.
    ///
    /// Raw text falls back to literal separator stripping, so malformed
    /// dates flow downstream unchanged rather than being rejected here.
    pub fn compact(&self) -> String {
        match self {
            Self::Parsed(date) => date.format("%Y%m%d").to_string(),
            Self::Raw(text) => text.replace('-', ""),
        }
    }
}

/// A user-entered clock time: either a parsed time of day or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelTime {
    Parsed(NaiveTime),
    Raw(String),
}

impl TravelTime {
    /// Parse "HH:MM" input. Anything else is kept raw.
    pub fn parse(input: &str) -> Self {
        match NaiveTime::parse_from_str(input, "%H:%M") {
            Ok(time) => Self::Parsed(time),
            Err(_) => Self::Raw(input.to_string()),
        }
    }

    /// Compact 4-digit HHMM form for the routing API.
    pub fn compact(&self) -> String {
        match self {
            Self::Parsed(time) => time.format("%H%M").to_string(),
            Self::Raw(text) => text.replace(':', ""),
        }
    }
}
