//! Course filtering and ranking.

use crate::domain::Course;

/// Keep only courses that satisfy all three predicates:
/// some segment is operated by `operator`, some segment runs on `line`,
/// and the course arrives no later than `arrival_bound`.
///
/// Times are compact zero-padded HHMM strings, so the arrival comparison
/// is plain lexicographic order.
pub fn filter_courses(
    courses: Vec<Course>,
    operator: &str,
    line: &str,
    arrival_bound: &str,
) -> Vec<Course> {
    courses
        .into_iter()
        .filter(|course| {
            course.uses_operator(operator)
                && course.uses_line(line)
                && course.arrival_time.as_str() <= arrival_bound
        })
        .collect()
}

/// Sort courses by time-on-board, longest first.
///
/// A course with no time-on-board value sorts as if it were zero, i.e.
/// last. The sort is stable: ties keep the order the search endpoint
/// returned them in.
pub fn rank_courses(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by_key(|course| std::cmp::Reverse(course.time_on_board.unwrap_or(0)));
    courses
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Course, LineSegment};
    use proptest::prelude::*;

    fn course_strategy() -> impl Strategy<Value = Course> {
        (
            proptest::option::of(0u32..600),
            0u32..24,
            0u32..60,
            prop::bool::ANY,
            prop::bool::ANY,
        )
            .prop_map(|(time_on_board, hour, minute, right_operator, right_line)| Course {
                departure_station: "A".to_string(),
                arrival_station: "B".to_string(),
                departure_time: "0900".to_string(),
                arrival_time: format!("{hour:02}{minute:02}"),
                segments: vec![LineSegment {
                    line: if right_line { "Y" } else { "W" }.to_string(),
                    operator: Some(if right_operator { "X" } else { "Z" }.to_string()),
                    board: "A".to_string(),
                    alight: "B".to_string(),
                }],
                time_on_board,
                fare: None,
            })
    }

    proptest! {
        #[test]
        fn rank_output_is_descending(courses in prop::collection::vec(course_strategy(), 0..20)) {
            let ranked = rank_courses(courses);

            for window in ranked.windows(2) {
                prop_assert!(
                    window[0].time_on_board.unwrap_or(0) >= window[1].time_on_board.unwrap_or(0)
                );
            }
        }

        #[test]
        fn rank_preserves_elements(courses in prop::collection::vec(course_strategy(), 0..20)) {
            let original_len = courses.len();
            let ranked = rank_courses(courses);
            prop_assert_eq!(ranked.len(), original_len);
        }

        #[test]
        fn filter_survivors_satisfy_all_predicates(
            courses in prop::collection::vec(course_strategy(), 0..20),
        ) {
            let kept = filter_courses(courses, "X", "Y", "1200");

            for course in &kept {
                prop_assert!(course.uses_operator("X"));
                prop_assert!(course.uses_line("Y"));
                prop_assert!(course.arrival_time.as_str() <= "1200");
            }
        }
    }
}
