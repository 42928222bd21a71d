use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Assistant,
}

/// A single message in the support chat widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub body: String,
    pub sent_at: String,
}

impl ChatMessage {
    pub fn user(body: impl Into<String>, sent_at: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            body: body.into(),
            sent_at: sent_at.into(),
        }
    }

    pub fn assistant(body: impl Into<String>, sent_at: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Assistant,
            body: body.into(),
            sent_at: sent_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_sender() {
        let q = ChatMessage::user("When is enrollment open?", "2025-09-01T10:00:00Z");
        let a = ChatMessage::assistant("Enrollment opens Monday.", "2025-09-01T10:00:01Z");
        assert_eq!(q.sender, ChatSender::User);
        assert_eq!(a.sender, ChatSender::Assistant);
    }

    #[test]
    fn message_roundtrips_through_json() {
        let m = ChatMessage::assistant("Hi there!", "2025-09-01T10:00:00Z");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<ChatMessage>(&json).unwrap(), m);
    }
}
