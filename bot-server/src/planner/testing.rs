//! Canned routing data for tests.

use crate::domain::{Corporation, Course, Line, LineSegment, Station, StationCode};
use crate::ekispert::CourseSearchParams;

use super::search::{RouteProvider, SearchError};

/// A `RouteProvider` serving fixed data, for planner and dialogue tests.
pub(crate) struct MockProvider {
    pub courses: Result<Vec<Course>, SearchError>,
    pub corporations: Result<Vec<Corporation>, SearchError>,
    pub lines: Result<Vec<Line>, SearchError>,
    pub station_found: bool,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            courses: Ok(vec![]),
            corporations: Ok(vec![]),
            lines: Ok(vec![]),
            station_found: true,
        }
    }
}

impl RouteProvider for MockProvider {
    async fn find_station(&self, name: &str) -> Result<Station, SearchError> {
        if self.station_found {
            Ok(Station {
                code: StationCode::new(format!("code-{name}")),
                name: name.to_string(),
            })
        } else {
            Err(SearchError::NotFound(name.to_string()))
        }
    }

    async fn corporations(&self) -> Result<Vec<Corporation>, SearchError> {
        self.corporations.clone()
    }

    async fn lines(&self, _corporation_name: &str) -> Result<Vec<Line>, SearchError> {
        self.lines.clone()
    }

    async fn search_courses(
        &self,
        _params: &CourseSearchParams,
    ) -> Result<Vec<Course>, SearchError> {
        self.courses.clone()
    }
}

/// A one-segment course with the given operator, line, arrival time, and
/// time on board.
pub(crate) fn course(
    operator: &str,
    line: &str,
    arrival_time: &str,
    time_on_board: Option<u32>,
) -> Course {
    Course {
        departure_station: "東京".to_string(),
        arrival_station: "東京".to_string(),
        departure_time: "1000".to_string(),
        arrival_time: arrival_time.to_string(),
        segments: vec![LineSegment {
            line: line.to_string(),
            operator: Some(operator.to_string()),
            board: "東京".to_string(),
            alight: "東京".to_string(),
        }],
        time_on_board,
        fare: None,
    }
}
