//! LINE webhook and message types.
//!
//! Only the fields the bot actually reads are modeled; the webhook payload
//! carries much more that is simply ignored.

use serde::{Deserialize, Serialize};

/// Inbound webhook body: one invocation delivers a batch of events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    pub events: Vec<WebhookEvent>,
}

/// One webhook event.
///
/// Only text-message events drive the conversation; everything else is
/// ignored and produces no outbound messages.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,

    /// Token for replying to this specific event. Usable once.
    #[serde(rename = "replyToken")]
    pub reply_token: Option<String>,

    pub source: Option<EventSource>,

    pub message: Option<EventMessage>,
}

impl WebhookEvent {
    /// The user id and text of this event, if it is a text message from an
    /// identified user.
    pub fn as_text_message(&self) -> Option<(&str, &str)> {
        if self.event_type != "message" {
            return None;
        }

        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }

        let user_id = self.source.as_ref()?.user_id.as_deref()?;
        let text = message.text.as_deref()?;

        Some((user_id, text))
    }
}

/// Who sent an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventSource {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// The message payload of a message event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub message_type: String,

    pub text: Option<String>,
}

/// An outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Message {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "template")]
    Template {
        #[serde(rename = "altText")]
        alt_text: String,
        template: ButtonsTemplate,
    },
}

impl Message {
    /// A plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// A buttons template message.
    pub fn buttons(
        alt_text: impl Into<String>,
        text: impl Into<String>,
        actions: Vec<MessageAction>,
    ) -> Self {
        Self::Template {
            alt_text: alt_text.into(),
            template: ButtonsTemplate {
                template_type: "buttons",
                text: text.into(),
                actions,
            },
        }
    }
}

/// A buttons template: a short label with single-tap choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonsTemplate {
    #[serde(rename = "type")]
    pub template_type: &'static str,

    pub text: String,

    pub actions: Vec<MessageAction>,
}

/// A single-tap choice. Tapping it sends `text` back as the user's next
/// message, so the payload always equals the label here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageAction {
    #[serde(rename = "type")]
    pub action_type: &'static str,

    pub label: String,

    pub text: String,
}

impl MessageAction {
    /// A message action whose payload is its label.
    pub fn echo(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            action_type: "message",
            text: label.clone(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_event_is_extracted() {
        let json = r#"{
            "type": "message",
            "replyToken": "token-1",
            "source": {"userId": "U123"},
            "message": {"type": "text", "text": "出発"}
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.as_text_message(), Some(("U123", "出発")));
    }

    #[test]
    fn non_message_event_is_ignored() {
        let json = r#"{"type": "follow", "source": {"userId": "U123"}}"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.as_text_message(), None);
    }

    #[test]
    fn non_text_message_is_ignored() {
        let json = r#"{
            "type": "message",
            "source": {"userId": "U123"},
            "message": {"type": "sticker"}
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.as_text_message(), None);
    }

    #[test]
    fn text_message_serializes_with_type_tag() {
        let message = Message::text("こんにちは");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "こんにちは");
    }

    #[test]
    fn buttons_template_serializes_to_line_shape() {
        let message = Message::buttons(
            "選択してください",
            "利用する鉄道会社を選択してください",
            vec![MessageAction::echo("JR東日本")],
        );
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "template");
        assert_eq!(json["altText"], "選択してください");
        assert_eq!(json["template"]["type"], "buttons");
        assert_eq!(json["template"]["actions"][0]["type"], "message");
        assert_eq!(json["template"]["actions"][0]["label"], "JR東日本");
        assert_eq!(json["template"]["actions"][0]["text"], "JR東日本");
    }
}
