//! Conversation state and accumulated answers.

/// Where a user stands in the question sequence.
///
/// The sequence is linear with no branching; the start keyword resets to
/// `AwaitDeparture` from any state, and the cycle ends back at `Idle`
/// whether the search succeeds or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitDeparture,
    AwaitDestination,
    AwaitDate,
    AwaitDepartureTime,
    AwaitArrivalTime,
    AwaitOperatorChoice,
    AwaitLineChoice,
}

/// Answers accumulated during one query cycle.
///
/// Values are stored exactly as the user typed them; parsing happens when
/// the search query is built. Fields only accumulate within a cycle and
/// are discarded wholesale on reset, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFields {
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub selected_operator: Option<String>,
    pub selected_line: Option<String>,
}

/// One user's conversation session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: ConversationState,
    pub fields: QueryFields,
}

impl Session {
    /// Start a fresh query cycle: clear every field and await the
    /// departure station.
    pub fn begin(&mut self) {
        self.fields = QueryFields::default();
        self.state = ConversationState::AwaitDeparture;
    }

    /// End the cycle. Leftover fields stay until the next `begin` clears
    /// them; they are never read outside a cycle.
    pub fn to_idle(&mut self) {
        self.state = ConversationState::Idle;
    }
}
