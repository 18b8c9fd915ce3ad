// SPDX-License-Identifier: MPL-2.0
//! Transcript and input state of the chat widget.

use super::Reply;

pub const GREETING: &str =
    "Connected to Vesni_Terminal. Ask me about his stack, projects, or security research.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    fn user(text: String) -> Self {
        Self {
            role: Role::User,
            text,
            is_error: false,
        }
    }

    fn model(reply: Reply) -> Self {
        Self {
            role: Role::Model,
            text: reply.text,
            is_error: reply.fallback,
        }
    }
}

/// One chat conversation. At most one request is in flight at a time.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Model,
                text: GREETING.to_string(),
                is_error: false,
            }],
            input: String::new(),
            pending: false,
        }
    }
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    /// Moves the trimmed input into the transcript and returns the text to
    /// send.
    ///
    /// Returns `None` when the input is blank or a request is already
    /// pending.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input).trim().to_string();
        self.messages.push(ChatMessage::user(text.clone()));
        self.pending = true;
        Some(text)
    }

    /// Appends the service reply and clears the pending flag.
    pub fn receive(&mut self, reply: Reply) {
        self.messages.push(ChatMessage::model(reply));
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Model);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn blank_input_is_not_sent() {
        let mut session = ChatSession::new();
        session.set_input("   ".into());
        assert!(!session.can_send());
        assert_eq!(session.begin_send(), None);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn send_moves_input_into_transcript() {
        let mut session = ChatSession::new();
        session.set_input("what do you build?".into());

        let sent = session.begin_send();
        assert_eq!(sent.as_deref(), Some("what do you build?"));
        assert!(session.input().is_empty());
        assert!(session.is_pending());
        assert_eq!(session.messages()[1].role, Role::User);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut session = ChatSession::new();
        session.set_input("first".into());
        assert!(session.begin_send().is_some());

        session.set_input("second".into());
        assert_eq!(session.begin_send(), None);

        session.receive(Reply::text("answer"));
        assert!(!session.is_pending());
        assert!(session.begin_send().is_some());
    }

    #[test]
    fn offline_reply_is_marked_as_error() {
        let mut session = ChatSession::new();
        session.set_input("hello".into());
        let _ = session.begin_send();
        session.receive(Reply::offline());

        let last = session.messages().last().expect("reply appended");
        assert_eq!(last.role, Role::Model);
        assert!(last.is_error);
    }
}
