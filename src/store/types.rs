use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message document as stored in the `messages` collection.
///
/// Only `id` is required on write; every other field is carried verbatim.
/// `timestamp` is whatever the client supplied, stored as-is and never
/// normalized. Fields outside the known set round-trip through `extra`, so
/// seeded payloads keep any additional data they were authored with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageRecord {
    /// Caller-generated identifier, unique across the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Opaque grouping key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// Free-text sender label. The client styles its own messages by
    /// comparing this to a fixed value; it is not an identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Message body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Client-supplied creation time, not validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Absent at creation, set via the status-update path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Any fields the known set does not cover
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageRecord {
    /// Create a record with the given id
    ///
    /// # Example
    ///
    /// ```
    /// use chat_relay::store::MessageRecord;
    ///
    /// let record = MessageRecord::new("msg_1")
    ///     .with_conversation("conversation_1")
    ///     .with_sender("You")
    ///     .with_text("hi")
    ///     .with_timestamp("2024-01-01T00:00:00Z");
    ///
    /// assert_eq!(record.id(), Some("msg_1"));
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Set the conversation key (builder pattern)
    pub fn with_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    /// Set the sender label (builder pattern)
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the message body (builder pattern)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the client-supplied timestamp (builder pattern)
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the status field (builder pattern)
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The non-empty id, if present
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
