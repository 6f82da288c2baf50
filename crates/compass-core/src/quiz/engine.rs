//! Quiz state machine.
//!
//! The engine holds a shared, immutable [`QuestionTree`] and drives
//! [`QuizSession`] values through it:
//!
//! ```text
//! NotStarted --start--> AtRoot --answer--> AtIntermediate(id) --answer--> Terminal(label)
//!                          \________________________answer_______________/
//! ```
//!
//! `Terminal` is absorbing until `restart()`. Transitions happen only in
//! [`QuizEngine::submit_answer`], and a rejected answer leaves the session
//! untouched.

use std::sync::Arc;

use super::builtin::builtin_tree;
use super::session::{Position, QuizAnswer, QuizSession, QuizState};
use super::tree::{QuestionNode, QuestionTree};
use crate::error::{ConfigurationError, QuizError};

/// What the driver should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn<'a> {
    /// Ask this question.
    Question(&'a QuestionNode),
    /// The quiz is over with this label.
    Complete(String),
}

impl Turn<'_> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Turn::Complete(_))
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Turn::Complete(label) => Some(label),
            Turn::Question(_) => None,
        }
    }
}

/// Drives quiz sessions through a question tree.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    tree: Arc<QuestionTree>,
}

impl QuizEngine {
    pub fn new(tree: QuestionTree) -> Self {
        Self::shared(Arc::new(tree))
    }

    /// Engine over a tree shared with other engines.
    pub fn shared(tree: Arc<QuestionTree>) -> Self {
        Self { tree }
    }

    /// Engine over the built-in questionnaire.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Ok(Self::new(builtin_tree()?))
    }

    pub fn tree(&self) -> &QuestionTree {
        &self.tree
    }

    /// Create a session that must be started before use.
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new()
    }

    /// Reset `session` to the root question, discarding answers and result.
    pub fn start(&self, session: &mut QuizSession) -> Turn<'_> {
        let root = self.tree.root();
        session.reset_to(Self::arrive(root));
        tracing::debug!(session = %session.id, root = %root.id, "quiz started");
        if session.is_complete() {
            self.log_resolution(session);
        }
        self.turn_for(session)
    }

    /// Same as [`start`](Self::start); always discards prior progress.
    pub fn restart(&self, session: &mut QuizSession) -> Turn<'_> {
        self.start(session)
    }

    /// The question to present, or the final label.
    ///
    /// # Errors
    ///
    /// [`QuizError::InvalidState`] if the session was never started.
    pub fn current_question(&self, session: &QuizSession) -> Result<Turn<'_>, QuizError> {
        match &session.position {
            Position::NotStarted => Err(not_started()),
            Position::Resolved(label) => Ok(Turn::Complete(label.clone())),
            Position::At(_) => self.current_node(session).map(Turn::Question),
        }
    }

    /// Record `option` as the answer to the current question and advance.
    ///
    /// # Errors
    ///
    /// - [`QuizError::InvalidState`] if the session is not started or already
    ///   finished
    /// - [`QuizError::InvalidOption`] if `option` is not offered by the current
    ///   question; the session is left unchanged
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        option: &str,
    ) -> Result<Turn<'_>, QuizError> {
        let node = self.current_node(session)?;
        if !node.has_option(option) {
            return Err(QuizError::InvalidOption {
                question_id: node.id.clone(),
                option: option.to_string(),
                valid: node.options.clone(),
            });
        }

        let next = match node.child_for(option) {
            Some(child_id) => {
                let child = self.tree.node(child_id).ok_or_else(|| {
                    QuizError::InvalidState(format!("question '{child_id}' is not defined"))
                })?;
                Self::arrive(child)
            }
            None => Position::Resolved(option.to_string()),
        };

        tracing::debug!(
            session = %session.id,
            question = %node.id,
            option,
            next = ?next,
            "answer accepted"
        );

        session.answers.push(QuizAnswer {
            question_id: node.id.clone(),
            option: option.to_string(),
        });
        session.position = next;

        if session.is_complete() {
            self.log_resolution(session);
        }
        Ok(self.turn_for(session))
    }

    /// The resolved label.
    ///
    /// # Errors
    ///
    /// [`QuizError::NotReady`] until the session reaches a terminal node.
    pub fn result<'s>(&self, session: &'s QuizSession) -> Result<&'s str, QuizError> {
        match &session.position {
            Position::Resolved(label) => Ok(label),
            Position::At(id) => Err(QuizError::NotReady {
                question_id: id.clone(),
            }),
            Position::NotStarted => Err(QuizError::NotReady {
                question_id: self.tree.root_id().to_string(),
            }),
        }
    }

    /// State-machine view of a started session.
    ///
    /// # Errors
    ///
    /// [`QuizError::InvalidState`] if the session was never started.
    pub fn state(&self, session: &QuizSession) -> Result<QuizState, QuizError> {
        match &session.position {
            Position::NotStarted => Err(not_started()),
            Position::Resolved(label) => Ok(QuizState::Terminal(label.clone())),
            Position::At(id) if id == self.tree.root_id() => Ok(QuizState::AtRoot),
            Position::At(id) => Ok(QuizState::AtIntermediate(id.clone())),
        }
    }

    fn current_node(&self, session: &QuizSession) -> Result<&QuestionNode, QuizError> {
        match &session.position {
            Position::NotStarted => Err(not_started()),
            Position::Resolved(label) => Err(QuizError::InvalidState(format!(
                "quiz already finished with '{label}'; restart to answer again"
            ))),
            Position::At(id) => self.tree.node(id).ok_or_else(|| {
                QuizError::InvalidState(format!("session points at unknown question '{id}'"))
            }),
        }
    }

    fn turn_for(&self, session: &QuizSession) -> Turn<'_> {
        match self.current_question(session) {
            Ok(turn) => turn,
            Err(err) => {
                tracing::warn!(
                    session = %session.id,
                    error = %err,
                    "session position does not fit this tree, showing the root question"
                );
                Turn::Question(self.tree.root())
            }
        }
    }

    fn log_resolution(&self, session: &QuizSession) {
        if let Some(label) = session.resolved_label() {
            tracing::info!(
                session = %session.id,
                label,
                answers = session.answers.len(),
                "quiz resolved"
            );
        }
    }

    fn arrive(node: &QuestionNode) -> Position {
        match node.terminal_label() {
            Some(label) => Position::Resolved(label.to_string()),
            None => Position::At(node.id.clone()),
        }
    }
}

fn not_started() -> QuizError {
    QuizError::InvalidState("quiz has not been started".to_string())
}
