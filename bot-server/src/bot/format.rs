//! Outbound message construction.
//!
//! Pure constructors only: nothing here talks to the network or touches
//! session state.

use crate::domain::RankedCourse;
use crate::line::{Message, MessageAction};

/// The chat transport renders at most this many buttons in one menu.
/// Options beyond the limit are silently dropped, first ones win.
pub const MAX_MENU_OPTIONS: usize = 4;

/// A plain text prompt.
pub fn prompt(text: impl Into<String>) -> Message {
    Message::text(text)
}

/// A single-tap choice menu over `options`, truncated to
/// `MAX_MENU_OPTIONS`. Each button echoes its label back as the user's
/// next text input.
pub fn choice_menu(alt_text: &str, label: &str, options: &[String]) -> Message {
    let actions = options
        .iter()
        .take(MAX_MENU_OPTIONS)
        .map(|name| MessageAction::echo(name.as_str()))
        .collect();

    Message::buttons(alt_text, label, actions)
}

/// Result messages: one lead summary, then one message per ranked course
/// carrying its title, a dep/arr/duration/fare line, and the segment path.
pub fn result_messages(ranked: &[RankedCourse]) -> Vec<Message> {
    let mut messages = vec![Message::text(
        "以下の3つのルートがオススメです！乗り鉄を楽しんでください！",
    )];

    for entry in ranked {
        let course = &entry.course;

        let title = format!(
            "ルート{}: {}→{}",
            entry.rank, course.departure_station, course.arrival_station
        );

        let duration = course
            .time_on_board
            .map(|mins| mins.to_string())
            .unwrap_or_else(|| "不明".to_string());
        let fare = course.fare.as_deref().unwrap_or("不明");

        let description = format!(
            "出発: {} → 到着: {}, 所要時間: {}分, 運賃: {}円",
            clock(&course.departure_time),
            clock(&course.arrival_time),
            duration,
            fare,
        );

        messages.push(Message::text(format!(
            "{title}\n{description}\n\n{}",
            course.segment_path()
        )));
    }

    messages
}

/// Render a compact HHMM time as HH:MM. Anything that is not four ASCII
/// digits (malformed input that flowed through a search) passes unchanged.
fn clock(compact: &str) -> String {
    if compact.len() == 4 && compact.is_ascii() {
        format!("{}:{}", &compact[..2], &compact[2..])
    } else {
        compact.to_string()
    }
}
