//! Direct message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserView;

/// A direct message between two users.
///
/// The timestamp is assigned by the server at creation and never changes;
/// the read flag starts false and can only be flipped to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Request body for sending a message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
}

/// An inbox message with its sender resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessage {
    #[serde(flatten)]
    pub message: Message,
    pub sender: UserView,
}
