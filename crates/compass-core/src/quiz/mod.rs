//! Guided questionnaire: tree definition, session state, and the engine
//! that moves a session through the tree.

pub mod builtin;
pub mod driver;
pub mod engine;
pub mod session;
pub mod tree;

pub use builtin::builtin_tree;
pub use driver::{run_quiz, Presenter, ScriptedPresenter};
pub use engine::{QuizEngine, Turn};
pub use session::{Position, QuizAnswer, QuizSession, QuizState, SessionId};
pub use tree::{QuestionNode, QuestionTree, TreeDefinition};
