//! Presentation seam between the engine and whatever shows questions.
//!
//! A [`Presenter`] shows one question at a time and hands back the chosen
//! option. [`run_quiz`] owns the loop: it re-presents the same question when
//! an answer is rejected and stops once the session resolves.

use std::collections::VecDeque;

use super::engine::{QuizEngine, Turn};
use super::session::QuizSession;
use super::tree::QuestionNode;
use crate::error::{CoreError, QuizError, Result};

/// Something that can ask a single-choice question.
pub trait Presenter {
    /// Show `question` and return the selected option text.
    fn choose(&mut self, question: &QuestionNode) -> Result<String>;

    /// Called when the answer to `question` was rejected, before it is shown again.
    fn reject(&mut self, _question: &QuestionNode, _error: &QuizError) {}
}

/// Run `session` from the root until it resolves and return the label.
///
/// # Errors
///
/// Propagates presenter failures. Invalid answers are not errors here; they
/// are reported to the presenter and the question is asked again.
pub fn run_quiz<P: Presenter + ?Sized>(
    engine: &QuizEngine,
    session: &mut QuizSession,
    presenter: &mut P,
) -> Result<String> {
    let mut turn = engine.start(session);
    loop {
        let question = match turn {
            Turn::Complete(label) => return Ok(label),
            Turn::Question(question) => question,
        };

        let answer = presenter.choose(question)?;
        turn = match engine.submit_answer(session, &answer) {
            Ok(next) => next,
            Err(err @ QuizError::InvalidOption { .. }) => {
                tracing::debug!(question = %question.id, answer = %answer, "answer rejected");
                presenter.reject(question, &err);
                Turn::Question(question)
            }
            Err(err) => return Err(err.into()),
        };
    }
}

/// Answers questions from a fixed list, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPresenter {
    answers: VecDeque<String>,
    rejected: Vec<QuizError>,
}

impl ScriptedPresenter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            rejected: Vec::new(),
        }
    }

    /// Answers the engine refused, in the order they were given.
    pub fn rejected(&self) -> &[QuizError] {
        &self.rejected
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Presenter for ScriptedPresenter {
    fn choose(&mut self, question: &QuestionNode) -> Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            CoreError::Presentation(format!(
                "no answer left for question '{}' ({})",
                question.id, question.prompt
            ))
        })
    }

    fn reject(&mut self, _question: &QuestionNode, error: &QuizError) {
        self.rejected.push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::builtin_tree;

    fn engine() -> QuizEngine {
        QuizEngine::new(builtin_tree().unwrap())
    }

    #[test]
    fn scripted_run_resolves_label() {
        let engine = engine();
        let mut session = engine.new_session();
        let mut presenter = ScriptedPresenter::new(["Architecture", "B.Arch."]);

        let label = run_quiz(&engine, &mut session, &mut presenter).unwrap();
        assert_eq!(label, "B.Arch.");
        assert_eq!(presenter.remaining(), 0);
        assert!(presenter.rejected().is_empty());
    }

    #[test]
    fn rejected_answer_reasks_same_question() {
        let engine = engine();
        let mut session = engine.new_session();
        let mut presenter = ScriptedPresenter::new(["Engineering", "M.Tech", "B.Tech"]);

        let label = run_quiz(&engine, &mut session, &mut presenter).unwrap();
        assert_eq!(label, "B.Tech");
        assert_eq!(presenter.rejected().len(), 1);
        assert!(matches!(
            &presenter.rejected()[0],
            QuizError::InvalidOption { question_id, .. } if question_id == "engineering"
        ));
        assert_eq!(session.answers().len(), 2);
    }

    #[test]
    fn running_out_of_answers_is_a_presentation_error() {
        let engine = engine();
        let mut session = engine.new_session();
        let mut presenter = ScriptedPresenter::new(["Medical"]);

        let err = run_quiz(&engine, &mut session, &mut presenter).unwrap_err();
        assert!(matches!(err, CoreError::Presentation(_)));
    }

    #[test]
    fn run_discards_previous_progress() {
        let engine = engine();
        let mut session = engine.new_session();
        let mut first = ScriptedPresenter::new(["Commerce", "BBA"]);
        run_quiz(&engine, &mut session, &mut first).unwrap();

        let mut second = ScriptedPresenter::new(["Arts", "BFA"]);
        let label = run_quiz(&engine, &mut session, &mut second).unwrap();
        assert_eq!(label, "BFA");
        assert_eq!(session.answers().len(), 2);
    }

    /// Answers "?" once, then the first option, and keeps the default `reject`.
    struct FirstOption {
        asked: usize,
    }

    impl Presenter for FirstOption {
        fn choose(&mut self, question: &QuestionNode) -> Result<String> {
            self.asked += 1;
            if self.asked == 1 {
                return Ok("?".to_string());
            }
            Ok(question.options[0].clone())
        }
    }

    #[test]
    fn default_reject_still_reasks() {
        let engine = engine();
        let mut session = engine.new_session();
        let mut presenter = FirstOption { asked: 0 };

        let label = run_quiz(&engine, &mut session, &mut presenter).unwrap();
        assert_eq!(label, "B.E.");
        assert_eq!(presenter.asked, 3);
    }
}
