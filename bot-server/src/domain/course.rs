//! Itinerary (course) domain types.

use std::fmt;

/// An opaque station code as issued by the routing API.
///
/// Codes are resolved from free-text station names immediately before each
/// search and never cached, so a `StationCode` is only as fresh as the
/// lookup that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved station: canonical code plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub code: StationCode,
    pub name: String,
}

/// A railway operator (company).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corporation {
    pub id: String,
    pub name: String,
}

/// A named line run by a single operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: String,
    pub name: String,
}

/// One ride on a single line within a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    /// Line name (e.g. 山手線).
    pub line: String,

    /// Operator name. The API omits this for some segments.
    pub operator: Option<String>,

    /// Station where the traveler boards this segment.
    pub board: String,

    /// Station where the traveler alights.
    pub alight: String,
}

/// One complete itinerary candidate returned by the routing API.
///
/// Clock times are compact 4-digit HHMM strings as the API supplies them.
/// Both endpoints of a comparison are zero-padded to the same length, so
/// lexicographic order is clock order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub departure_station: String,
    pub arrival_station: String,

    /// Departure clock time, compact HHMM.
    pub departure_time: String,

    /// Arrival clock time, compact HHMM.
    pub arrival_time: String,

    /// Rides in travel order.
    pub segments: Vec<LineSegment>,

    /// Total minutes spent aboard trains. Absent when the API omits it;
    /// such courses rank below every course with a known value.
    pub time_on_board: Option<u32>,

    /// Fare in yen. Absent when the API omits it; displayed as unknown.
    pub fare: Option<String>,
}

impl Course {
    /// True if any segment is operated by `operator`.
    pub fn uses_operator(&self, operator: &str) -> bool {
        self.segments
            .iter()
            .any(|seg| seg.operator.as_deref() == Some(operator))
    }

    /// True if any segment runs on `line`.
    pub fn uses_line(&self, line: &str) -> bool {
        self.segments.iter().any(|seg| seg.line == line)
    }

    /// Render the ride sequence as `board [line] → alight` per segment,
    /// joined by arrows.
    pub fn segment_path(&self) -> String {
        self.segments
            .iter()
            .map(|seg| format!("{} [{}] → {}", seg.board, seg.line, seg.alight))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// A course plus its 1-based position in the ranked output, used only for
/// display-label numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCourse {
    pub rank: usize,
    pub course: Course,
}
