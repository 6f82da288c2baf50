//! Built-in interest questionnaire.
//!
//! One root question about broad interests, each interest leading to a
//! question about concrete courses.

use super::tree::{QuestionNode, QuestionTree};
use crate::error::ConfigurationError;

/// Id of the root question.
pub const ROOT_ID: &str = "interests";

/// Returns the built-in question tree.
///
/// # Errors
///
/// Only fails if the built-in definition itself is malformed.
pub fn builtin_tree() -> Result<QuestionTree, ConfigurationError> {
    QuestionTree::new(ROOT_ID, builtin_nodes())
}

fn builtin_nodes() -> Vec<QuestionNode> {
    let branches = [
        (
            "Engineering",
            "engineering",
            "Which branch are you interested in?",
            vec!["B.E.", "B.Tech"],
        ),
        (
            "Medical",
            "medical",
            "Which field are you interested in?",
            vec!["MBBS", "B.Sc. Nursing", "BAMS", "B.Sc. Paramedical"],
        ),
        (
            "Commerce",
            "commerce",
            "Which course in Commerce are you interested in?",
            vec!["BBA", "B.Com", "CA/CPA"],
        ),
        (
            "Arts",
            "arts",
            "Which Arts course are you interested in?",
            vec!["B.A.", "BFA", "BA(Hons.)"],
        ),
        (
            "Architecture",
            "architecture",
            "Which Architecture course are you interested in?",
            vec!["B.Arch."],
        ),
        (
            "Other",
            "other",
            "Which other course are you interested in?",
            vec!["BCA", "Diploma", "Other"],
        ),
    ];

    let mut root = QuestionNode::new(
        ROOT_ID,
        "What are your main interests?",
        branches.iter().map(|(interest, ..)| *interest),
    );
    for (interest, id, ..) in &branches {
        root = root.with_child(*interest, *id);
    }

    let mut nodes = vec![root];
    nodes.extend(
        branches
            .into_iter()
            .map(|(_, id, prompt, courses)| QuestionNode::new(id, prompt, courses)),
    );
    nodes
}
