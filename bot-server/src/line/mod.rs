//! LINE Messaging API transport.
//!
//! Inbound webhook event types, outbound message shapes, the reply/push
//! client, and webhook signature verification. Nothing in here knows about
//! the conversation; it is the bot's wire layer.

mod client;
mod error;
pub mod signature;
mod types;

pub use client::{LineClient, LineConfig};
pub use error::LineError;
pub use types::{
    ButtonsTemplate, EventMessage, EventSource, Message, MessageAction, WebhookEvent,
    WebhookRequest,
};
