//! HTTP route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use futures::future::try_join_all;
use tracing::{error, warn};

use crate::line::{LineError, Message, WebhookEvent, WebhookRequest, signature};

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Webhook endpoint.
///
/// Verifies the signature over the raw body, then dispatches every event
/// in the batch concurrently and joins them all-or-nothing: if any single
/// handler fails, the whole batch answers 500. Per-user ordering is still
/// safe because the session store serializes turns per user.
async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let provided = headers
        .get("x-line-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !signature::verify(&state.channel_secret, &body, provided) {
        warn!("webhook signature mismatch");
        return StatusCode::UNAUTHORIZED;
    }

    let request: WebhookRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "unparseable webhook body");
            return StatusCode::BAD_REQUEST;
        }
    };

    let handlers = request.events.iter().map(|event| handle_event(&state, event));

    match try_join_all(handlers).await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            error!(error = %err, "webhook batch failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle one webhook event.
///
/// Non-text events produce nothing. Conversation errors never surface
/// here; the dialogue flattens them into apology messages. What can fail
/// is delivery, in which case we fall back to the event's one-shot reply
/// token with a generic apology before giving up on the batch.
async fn handle_event(state: &AppState, event: &WebhookEvent) -> Result<(), LineError> {
    let Some((user_id, text)) = event.as_text_message() else {
        return Ok(());
    };

    let messages = state.dialogue.handle_message(user_id, text).await;
    if messages.is_empty() {
        return Ok(());
    }

    match state.line.push(user_id, &messages).await {
        Ok(()) => Ok(()),
        Err(err) => {
            error!(user_id, error = %err, "push failed");
            let Some(reply_token) = event.reply_token.as_deref() else {
                return Err(err);
            };
            state
                .line
                .reply(
                    reply_token,
                    &[Message::text("エラーが発生しました。もう一度お試しください。")],
                )
                .await
        }
    }
}
