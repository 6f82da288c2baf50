//! # Career Compass Core Library
//!
//! This library provides the core logic for Career Compass, a guided
//! questionnaire that suggests a course and shows how to pursue it.
//! All operations are available through the `compass` CLI, which is a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Quiz Engine**: a deterministic state machine that moves a caller-owned
//!   session through a validated question tree, one answer at a time
//! - **Catalog Matcher**: resolves a label to a roadmap and to the
//!   institutions offering a matching course
//! - **Storage**: TOML-based settings
//!
//! ## Key Components
//!
//! - [`QuizEngine`]: quiz state machine
//! - [`QuestionTree`]: validated branching questions
//! - [`CatalogMatcher`]: roadmap and institution lookups
//! - [`Presenter`]: trait for whatever shows questions to the user
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod error;
pub mod greeting;
pub mod quiz;
pub mod storage;

pub use catalog::{
    Catalog, CatalogEntry, CatalogMatcher, CourseMatch, InstitutionMatch, Notification, Roadmap,
    RoadmapSource, SearchKind, SearchResults,
};
pub use error::{ConfigError, ConfigurationError, CoreError, QuizError, Result};
pub use quiz::{
    builtin_tree, run_quiz, Presenter, QuestionNode, QuestionTree, QuizAnswer, QuizEngine,
    QuizSession, QuizState, ScriptedPresenter, Turn,
};
pub use storage::Config;
