//! Conversion from Ekispert DTOs to domain types.

use crate::domain::{Course, LineSegment};

use super::types::CourseDto;

/// Convert one API course into a domain `Course`.
///
/// A ride's boarding and alighting stations are the first and last entries
/// of its station list. `timeOnBoard` values that fail to parse as an
/// integer are treated as absent, which puts the course at the bottom of
/// the ranking.
pub fn convert_course(dto: CourseDto) -> Course {
    let route = dto.route;

    let segments = route
        .line
        .into_vec()
        .into_iter()
        .map(|line| {
            let stations = line.station.into_vec();
            let board = stations
                .first()
                .map(|s| s.name.clone())
                .unwrap_or_default();
            let alight = stations
                .last()
                .map(|s| s.name.clone())
                .unwrap_or_default();

            LineSegment {
                line: line.name,
                operator: line.corporation.map(|c| c.name),
                board,
                alight,
            }
        })
        .collect();

    let time_on_board = route
        .time_on_board
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok());

    Course {
        departure_station: route.departure.station.name,
        arrival_station: route.arrival.station.name,
        departure_time: route.departure.time,
        arrival_time: route.arrival.time,
        segments,
        time_on_board,
        fare: dto.price.and_then(|p| p.fare),
    }
}
