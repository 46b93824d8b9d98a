//! Conversation state machine.
//!
//! One linear question sequence per query cycle:
//! Idle → departure → destination → date → departure time → arrival time
//! → operator menu → line menu → results → Idle.
//!
//! Every external-call failure is caught here, logged, and flattened into
//! a single apology message with the session reset to idle; no error
//! escapes to the transport layer.

use tracing::{debug, error};

use crate::domain::{TravelDate, TravelTime};
use crate::line::Message;
use crate::planner::{Planner, RouteProvider, TravelQuery};
use crate::session::{ConversationState, QueryFields, SessionStore};

use super::format::{choice_menu, prompt, result_messages};

/// The reserved keyword that starts (or restarts) a query cycle. Checked
/// before state dispatch, so it overrides whatever state the user is in.
pub const START_KEYWORD: &str = "出発";

/// Per-user conversation driver.
///
/// Holds the session store and the planner; each inbound text message
/// becomes the outbound messages for that turn. The session's mutex is
/// held for the whole turn, so two messages from one user are applied in
/// arrival order even when their webhook batch dispatches them
/// concurrently.
pub struct Dialogue<P> {
    planner: Planner<P>,
    store: SessionStore,
}

impl<P: RouteProvider> Dialogue<P> {
    pub fn new(planner: Planner<P>, store: SessionStore) -> Self {
        Self { planner, store }
    }

    /// Handle one inbound text message from `user_id`.
    pub async fn handle_message(&self, user_id: &str, text: &str) -> Vec<Message> {
        let session = self.store.session(user_id).await;
        let mut session = session.lock().await;

        if text == START_KEYWORD {
            session.begin();
            return vec![prompt("出発駅を入力してください")];
        }

        match session.state {
            ConversationState::AwaitDeparture => {
                session.fields.departure = Some(text.to_string());
                session.state = ConversationState::AwaitDestination;
                vec![prompt("目的駅を入力してください")]
            }

            ConversationState::AwaitDestination => {
                session.fields.destination = Some(text.to_string());
                session.state = ConversationState::AwaitDate;
                vec![prompt("出発日を入力してください（例: 2023-03-08）")]
            }

            ConversationState::AwaitDate => {
                session.fields.date = Some(text.to_string());
                session.state = ConversationState::AwaitDepartureTime;
                vec![prompt("出発時刻を入力してください（例: 10:00）")]
            }

            ConversationState::AwaitDepartureTime => {
                session.fields.departure_time = Some(text.to_string());
                session.state = ConversationState::AwaitArrivalTime;
                vec![prompt("到着時刻を入力してください（例: 18:00）")]
            }

            ConversationState::AwaitArrivalTime => {
                session.fields.arrival_time = Some(text.to_string());
                session.state = ConversationState::AwaitOperatorChoice;

                match self.planner.provider().corporations().await {
                    Ok(corporations) => {
                        let names: Vec<String> =
                            corporations.into_iter().map(|c| c.name).collect();
                        vec![choice_menu(
                            "鉄道会社を選択してください",
                            "利用する鉄道会社を選択してください",
                            &names,
                        )]
                    }
                    Err(err) => {
                        error!(user_id, error = %err, "failed to list railway companies");
                        session.to_idle();
                        vec![prompt("鉄道会社の取得に失敗しました。もう一度お試しください。")]
                    }
                }
            }

            ConversationState::AwaitOperatorChoice => {
                session.fields.selected_operator = Some(text.to_string());
                session.state = ConversationState::AwaitLineChoice;

                match self.planner.provider().lines(text).await {
                    Ok(lines) => {
                        let names: Vec<String> = lines.into_iter().map(|l| l.name).collect();
                        vec![choice_menu(
                            "路線を選択してください",
                            "利用する路線を選択してください",
                            &names,
                        )]
                    }
                    Err(err) => {
                        error!(user_id, error = %err, "failed to list lines");
                        session.to_idle();
                        vec![prompt("路線の取得に失敗しました。もう一度お試しください。")]
                    }
                }
            }

            ConversationState::AwaitLineChoice => {
                session.fields.selected_line = Some(text.to_string());
                // The cycle is over whatever the search outcome is.
                session.to_idle();

                let Some(query) = build_query(&session.fields) else {
                    error!(user_id, "line choice arrived with incomplete fields");
                    return vec![prompt("ルートの取得に失敗しました。もう一度お試しください。")];
                };

                debug!(user_id, operator = %query.operator, line = %query.line, "running route search");

                match self.planner.plan(&query).await {
                    Ok(ranked) if ranked.is_empty() => {
                        vec![prompt(
                            "条件に合うルートが見つかりませんでした。条件を変えてもう一度お試しください。",
                        )]
                    }
                    Ok(ranked) => result_messages(&ranked),
                    Err(err) => {
                        error!(user_id, error = %err, "route search failed");
                        vec![prompt("ルートの取得に失敗しました。もう一度お試しください。")]
                    }
                }
            }

            ConversationState::Idle => {
                vec![prompt("「出発」と入力して、旅行計画を始めましょう！")]
            }
        }
    }
}

/// Assemble the typed query from the accumulated answers.
///
/// Returns `None` only if a field is missing, which the linear state
/// sequence does not normally allow.
fn build_query(fields: &QueryFields) -> Option<TravelQuery> {
    Some(TravelQuery {
        departure: fields.departure.clone()?,
        destination: fields.destination.clone()?,
        date: TravelDate::parse(fields.date.as_deref()?),
        departure_time: TravelTime::parse(fields.departure_time.as_deref()?),
        arrival_bound: TravelTime::parse(fields.arrival_time.as_deref()?),
        operator: fields.selected_operator.clone()?,
        line: fields.selected_line.clone()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Corporation, Line};
    use crate::planner::testing::{MockProvider, course};
    use crate::planner::{PlannerConfig, SearchError};

    fn dialogue(provider: MockProvider) -> Dialogue<MockProvider> {
        Dialogue::new(
            Planner::new(provider, PlannerConfig::default()),
            SessionStore::new(),
        )
    }

    fn provider_with_courses() -> MockProvider {
        MockProvider {
            corporations: Ok(vec![Corporation {
                id: "1".to_string(),
                name: "X".to_string(),
            }]),
            lines: Ok(vec![Line {
                id: "101".to_string(),
                name: "Y".to_string(),
            }]),
            courses: Ok(vec![
                course("X", "Y", "1700", Some(30)),
                course("X", "Y", "1700", Some(90)),
            ]),
            ..Default::default()
        }
    }

    async fn state_of(dialogue: &Dialogue<MockProvider>, user: &str) -> ConversationState {
        dialogue.store.session(user).await.lock().await.state
    }

    fn text_of(message: &Message) -> &str {
        match message {
            Message::Text { text } => text,
            Message::Template { alt_text, .. } => alt_text,
        }
    }

    #[tokio::test]
    async fn full_cycle_visits_states_in_order_and_returns_to_idle() {
        let bot = dialogue(provider_with_courses());
        let user = "U1";

        let steps: &[(&str, ConversationState)] = &[
            ("出発", ConversationState::AwaitDeparture),
            ("東京", ConversationState::AwaitDestination),
            ("東京", ConversationState::AwaitDate),
            ("2023-03-08", ConversationState::AwaitDepartureTime),
            ("10:00", ConversationState::AwaitArrivalTime),
            ("18:00", ConversationState::AwaitOperatorChoice),
            ("X", ConversationState::AwaitLineChoice),
            ("Y", ConversationState::Idle),
        ];

        for (input, expected_state) in steps {
            let replies = bot.handle_message(user, input).await;
            assert!(!replies.is_empty(), "no reply for input {input}");
            assert_eq!(state_of(&bot, user).await, *expected_state, "after input {input}");
        }
    }

    #[tokio::test]
    async fn final_choice_emits_ranked_results() {
        let bot = dialogue(provider_with_courses());
        let user = "U1";

        for input in ["出発", "東京", "東京", "2023-03-08", "10:00", "18:00", "X"] {
            bot.handle_message(user, input).await;
        }
        let replies = bot.handle_message(user, "Y").await;

        // Lead summary plus one message per ranked course.
        assert_eq!(replies.len(), 3);
        assert!(text_of(&replies[1]).contains("ルート1"));
        // Longest time on board first.
        assert!(text_of(&replies[1]).contains("90分"));
        assert!(text_of(&replies[2]).contains("30分"));
    }

    #[tokio::test]
    async fn start_keyword_resets_from_any_state() {
        let bot = dialogue(provider_with_courses());
        let user = "U1";

        bot.handle_message(user, "出発").await;
        bot.handle_message(user, "東京").await;
        bot.handle_message(user, "高尾").await;
        assert_eq!(state_of(&bot, user).await, ConversationState::AwaitDate);

        bot.handle_message(user, "出発").await;
        assert_eq!(state_of(&bot, user).await, ConversationState::AwaitDeparture);

        let session = bot.store.session(user).await;
        assert_eq!(session.lock().await.fields, QueryFields::default());
    }

    #[tokio::test]
    async fn start_keyword_reset_is_idempotent() {
        let bot = dialogue(provider_with_courses());
        let user = "U1";

        let first = bot.handle_message(user, "出発").await;
        let second = bot.handle_message(user, "出発").await;

        assert_eq!(first, second);
        assert_eq!(state_of(&bot, user).await, ConversationState::AwaitDeparture);
    }

    #[tokio::test]
    async fn operator_listing_failure_resets_to_idle_with_one_message() {
        let provider = MockProvider {
            corporations: Err(SearchError::Upstream("boom".to_string())),
            ..Default::default()
        };
        let bot = dialogue(provider);
        let user = "U1";

        for input in ["出発", "東京", "東京", "2023-03-08", "10:00"] {
            bot.handle_message(user, input).await;
        }
        let replies = bot.handle_message(user, "18:00").await;

        assert_eq!(replies.len(), 1);
        assert!(text_of(&replies[0]).contains("鉄道会社の取得に失敗しました"));
        assert_eq!(state_of(&bot, user).await, ConversationState::Idle);

        // Nothing from the failed cycle leaks into the next start.
        bot.handle_message(user, "出発").await;
        let session = bot.store.session(user).await;
        assert_eq!(session.lock().await.fields, QueryFields::default());
    }

    #[tokio::test]
    async fn line_listing_failure_resets_to_idle() {
        let provider = MockProvider {
            corporations: Ok(vec![Corporation {
                id: "1".to_string(),
                name: "X".to_string(),
            }]),
            lines: Err(SearchError::Upstream("boom".to_string())),
            ..Default::default()
        };
        let bot = dialogue(provider);
        let user = "U1";

        for input in ["出発", "東京", "東京", "2023-03-08", "10:00", "18:00"] {
            bot.handle_message(user, input).await;
        }
        let replies = bot.handle_message(user, "X").await;

        assert_eq!(replies.len(), 1);
        assert!(text_of(&replies[0]).contains("路線の取得に失敗しました"));
        assert_eq!(state_of(&bot, user).await, ConversationState::Idle);
    }

    #[tokio::test]
    async fn empty_search_message_differs_from_failure_message() {
        let empty = dialogue(provider_with_courses_but(Ok(vec![])));
        let failing = dialogue(provider_with_courses_but(Err(SearchError::Upstream(
            "boom".to_string(),
        ))));

        let empty_reply = run_full_cycle(&empty).await;
        let failure_reply = run_full_cycle(&failing).await;

        assert_eq!(empty_reply.len(), 1);
        assert_eq!(failure_reply.len(), 1);
        assert_ne!(text_of(&empty_reply[0]), text_of(&failure_reply[0]));
        assert!(text_of(&empty_reply[0]).contains("見つかりませんでした"));
        assert!(text_of(&failure_reply[0]).contains("失敗しました"));
    }

    fn provider_with_courses_but(
        courses: Result<Vec<crate::domain::Course>, SearchError>,
    ) -> MockProvider {
        MockProvider {
            courses,
            ..provider_with_courses()
        }
    }

    async fn run_full_cycle(bot: &Dialogue<MockProvider>) -> Vec<Message> {
        let user = "U1";
        for input in ["出発", "東京", "東京", "2023-03-08", "10:00", "18:00", "X"] {
            bot.handle_message(user, input).await;
        }
        bot.handle_message(user, "Y").await
    }

    #[tokio::test]
    async fn idle_text_gets_help_prompt() {
        let bot = dialogue(MockProvider::default());

        let replies = bot.handle_message("U1", "こんにちは").await;

        assert_eq!(replies.len(), 1);
        assert!(text_of(&replies[0]).contains("「出発」と入力して"));
        assert_eq!(state_of(&bot, "U1").await, ConversationState::Idle);
    }

    #[tokio::test]
    async fn any_nonempty_text_is_accepted_as_a_field() {
        // Malformed dates and times are not rejected; they only surface as
        // a search outcome later.
        let bot = dialogue(provider_with_courses());
        let user = "U1";

        bot.handle_message(user, "出発").await;
        bot.handle_message(user, "東京").await;
        bot.handle_message(user, "東京").await;
        bot.handle_message(user, "そのうち").await;
        assert_eq!(
            state_of(&bot, user).await,
            ConversationState::AwaitDepartureTime
        );

        let session = bot.store.session(user).await;
        assert_eq!(
            session.lock().await.fields.date.as_deref(),
            Some("そのうち")
        );
    }

    #[tokio::test]
    async fn sessions_do_not_cross_users() {
        let bot = dialogue(provider_with_courses());

        bot.handle_message("U1", "出発").await;
        bot.handle_message("U2", "こんにちは").await;

        assert_eq!(state_of(&bot, "U1").await, ConversationState::AwaitDeparture);
        assert_eq!(state_of(&bot, "U2").await, ConversationState::Idle);
    }
}
