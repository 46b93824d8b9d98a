//! Domain types for the rail-fan route bot.
//!
//! These types represent the routing vocabulary the bot works with:
//! stations, operators, lines, and complete itinerary candidates. DTO
//! decoding lives in the `ekispert` module; everything here is already
//! normalized.

mod course;
mod time;

pub use course::{Corporation, Course, Line, LineSegment, RankedCourse, Station, StationCode};
pub use time::{TravelDate, TravelTime};
