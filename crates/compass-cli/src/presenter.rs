use std::io::{BufRead, Write};

use compass_core::{CoreError, Presenter, QuestionNode, QuizError};

/// Asks questions on a line-oriented terminal.
///
/// Options are numbered from 1. A reply may be the number or the option text;
/// anything else is passed through so the engine can reject it.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &QuestionNode) -> std::io::Result<Option<String>> {
        writeln!(self.output, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(resolve_reply(question, line.trim())))
    }
}

/// Map a reply to option text: a 1-based index or the text itself.
fn resolve_reply(question: &QuestionNode, reply: &str) -> String {
    reply
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .cloned()
        .unwrap_or_else(|| reply.to_string())
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn choose(&mut self, question: &QuestionNode) -> compass_core::Result<String> {
        match self.ask(question)? {
            Some(answer) => Ok(answer),
            None => Err(CoreError::Presentation(format!(
                "input closed before answering '{}'",
                question.prompt
            ))),
        }
    }

    fn reject(&mut self, _question: &QuestionNode, error: &QuizError) {
        let _ = writeln!(self.output, "{error}. Please choose again.\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_core::{run_quiz, QuizEngine};

    fn question() -> QuestionNode {
        QuestionNode::new("interests", "Pick one", ["Engineering", "Medical"])
    }

    #[test]
    fn test_reply_by_number_or_text() {
        let q = question();
        assert_eq!(resolve_reply(&q, "2"), "Medical");
        assert_eq!(resolve_reply(&q, "Engineering"), "Engineering");
        assert_eq!(resolve_reply(&q, "0"), "0");
        assert_eq!(resolve_reply(&q, "9"), "9");
    }

    #[test]
    fn test_prints_numbered_options() {
        let mut out = Vec::new();
        let mut presenter = TerminalPresenter::new("1\n".as_bytes(), &mut out);
        let answer = presenter.choose(&question()).unwrap();
        drop(presenter);

        assert_eq!(answer, "Engineering");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Pick one\n  1. Engineering\n  2. Medical\n> "));
    }

    #[test]
    fn test_closed_input_is_presentation_error() {
        let mut presenter = TerminalPresenter::new("".as_bytes(), Vec::new());
        let err = presenter.choose(&question()).unwrap_err();
        assert!(matches!(err, CoreError::Presentation(_)));
    }

    #[test]
    fn test_reasks_after_invalid_reply() {
        let engine = QuizEngine::builtin().unwrap();
        let mut session = engine.new_session();
        let mut out = Vec::new();
        let mut presenter =
            TerminalPresenter::new("Law\n7\n3\nBBA\n".as_bytes(), &mut out);

        let label = run_quiz(&engine, &mut session, &mut presenter).unwrap();
        drop(presenter);

        assert_eq!(label, "BBA");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Please choose again").count(), 2);
    }
}
