//! Core error types for compass-core.
//!
//! The hierarchy mirrors how failures are recovered:
//! - [`QuizError`] is raised while traversing a session and is always
//!   recoverable by the driver (re-prompt or restart)
//! - [`ConfigurationError`] is raised while building a question tree or
//!   loading a catalog and is fatal for that data set
//! - [`ConfigError`] covers the TOML settings file

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for compass-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quiz traversal errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Malformed question tree or catalog
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Settings file errors
    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),

    /// The presentation driver could not supply an answer
    #[error("Presentation error: {0}")]
    Presentation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by [`crate::QuizEngine`] operations on a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The session has not been started, or is already terminal.
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// The submitted answer is not one of the current question's options.
    #[error("Invalid option '{option}' for question '{question_id}' (expected one of: {})", .valid.join(", "))]
    InvalidOption {
        question_id: String,
        option: String,
        valid: Vec<String>,
    },

    /// A result was requested before the session reached a terminal node.
    #[error("Quiz not finished: still at question '{question_id}'")]
    NotReady { question_id: String },
}

/// Structural problems in a question tree or catalog, detected at load time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Root node id does not exist in the tree
    #[error("Root question '{0}' is not defined")]
    UnknownRoot(String),

    /// Two nodes share an id
    #[error("Question '{0}' is defined more than once")]
    DuplicateNode(String),

    /// A node lists the same option twice
    #[error("Question '{question_id}' lists option '{option}' more than once")]
    DuplicateOption { question_id: String, option: String },

    /// An option is empty or whitespace, so selecting it yields no label
    #[error("Question '{0}' has a blank option")]
    BlankOption(String),

    /// A child reference is keyed by something that is not an option
    #[error("Question '{question_id}' has a follow-up for '{option}', which is not one of its options")]
    ChildWithoutOption { question_id: String, option: String },

    /// A child reference points at a node that does not exist
    #[error("Question '{question_id}' option '{option}' leads to undefined question '{child}'")]
    UnknownChild {
        question_id: String,
        option: String,
        child: String,
    },

    /// A node without options has nothing to resolve to
    #[error("Question '{0}' has no options and no label to resolve to")]
    TerminalWithoutLabel(String),

    /// Traversal could loop forever
    #[error("Question '{0}' can be reached from itself")]
    Cycle(String),

    /// Catalog entry with a blank institution name
    #[error("Catalog entry #{index} has a blank institution name")]
    BlankInstitution { index: usize },

    /// Catalog entry with a blank course string
    #[error("Institution '{institution}' lists a blank course")]
    BlankCourse { institution: String },

    /// Curated roadmap without any steps
    #[error("Roadmap for '{0}' has no steps")]
    EmptyRoadmap(String),

    /// The data could not be parsed into the expected shape
    #[error("Failed to parse {what}: {message}")]
    Parse { what: String, message: String },
}

/// Settings-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
