//! Per-user quiz session state.

use serde::{Deserialize, Serialize};

/// Unique identifier for a quiz session.
pub type SessionId = String;

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Position {
    /// Created but `start()` has not been called.
    #[default]
    NotStarted,
    /// Waiting for an answer to this question.
    At(String),
    /// Finished with this label.
    Resolved(String),
}

/// An answer recorded in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// Question that was answered.
    pub question_id: String,
    /// Option that was chosen.
    pub option: String,
}

/// State-machine view of a started session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    AtRoot,
    AtIntermediate(String),
    Terminal(String),
}

/// One user's traversal of a question tree.
///
/// Sessions are plain values owned by the caller; the engine only reads and
/// mutates the session handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    /// Unique session identifier.
    pub id: SessionId,
    pub(crate) position: Position,
    pub(crate) answers: Vec<QuizAnswer>,
}

impl QuizSession {
    /// Create a session that has not been started yet.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            position: Position::NotStarted,
            answers: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Answers given so far, oldest first.
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn is_started(&self) -> bool {
        self.position != Position::NotStarted
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.position, Position::Resolved(_))
    }

    /// The resolved label, if the session is terminal.
    pub fn resolved_label(&self) -> Option<&str> {
        match &self.position {
            Position::Resolved(label) => Some(label),
            _ => None,
        }
    }

    pub(crate) fn reset_to(&mut self, position: Position) {
        self.answers.clear();
        self.position = position;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_not_started() {
        let session = QuizSession::new();
        assert!(!session.is_started());
        assert!(!session.is_complete());
        assert!(session.answers().is_empty());
        assert_eq!(session.resolved_label(), None);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(QuizSession::new().id, QuizSession::new().id);
    }

    #[test]
    fn position_serializes_with_tag() {
        let json = serde_json::to_string(&Position::At("interests".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"at","value":"interests"}"#);
    }
}
