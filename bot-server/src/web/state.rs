//! Application state for the web layer.

use std::sync::Arc;

use crate::bot::Dialogue;
use crate::ekispert::EkispertClient;
use crate::line::LineClient;

/// Shared application state.
///
/// Contains everything needed to handle webhook deliveries.
#[derive(Clone)]
pub struct AppState {
    /// Conversation driver over the live routing client
    pub dialogue: Arc<Dialogue<EkispertClient>>,

    /// LINE send client
    pub line: Arc<LineClient>,

    /// Channel secret for webhook signature verification
    pub channel_secret: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        dialogue: Dialogue<EkispertClient>,
        line: LineClient,
        channel_secret: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            dialogue: Arc::new(dialogue),
            line: Arc::new(line),
            channel_secret: channel_secret.into(),
        }
    }
}
