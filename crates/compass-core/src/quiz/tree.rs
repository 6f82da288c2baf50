//! Branching question tree.
//!
//! A tree is a set of [`QuestionNode`]s keyed by id plus a designated root.
//! Each node links options to follow-up nodes explicitly; an option without a
//! follow-up ends the quiz with that option as the resolved label. Trees are
//! validated once when built, so traversal never meets a dangling reference.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigurationError, Result};

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    /// Unique identifier within the tree.
    pub id: String,
    /// Question text.
    pub prompt: String,
    /// Options in display order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Follow-up question id per option. Options absent here are terminal.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, String>,
    /// Label this node resolves to when it has no options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl QuestionNode {
    pub fn new<I, S>(id: impl Into<String>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            children: IndexMap::new(),
            label: None,
        }
    }

    /// Link `option` to the follow-up question `child`.
    pub fn with_child(mut self, option: impl Into<String>, child: impl Into<String>) -> Self {
        self.children.insert(option.into(), child.into());
        self
    }

    /// Set the label used when this node has no options.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Follow-up question id for `option`, if any.
    pub fn child_for(&self, option: &str) -> Option<&str> {
        self.children.get(option).map(String::as_str)
    }

    /// A node without options ends the quiz on arrival.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    /// The label an option-less node resolves to.
    ///
    /// Always `Some` for terminal nodes of a validated tree.
    pub fn terminal_label(&self) -> Option<&str> {
        if !self.is_terminal() {
            return None;
        }
        self.label.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Serialized form of a tree, as stored in JSON or TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDefinition {
    pub root: String,
    pub nodes: Vec<QuestionNode>,
}

/// A validated, immutable question tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTree {
    root: String,
    nodes: IndexMap<String, QuestionNode>,
}

impl QuestionTree {
    /// Build and validate a tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] describing the first structural
    /// problem found: unknown root, duplicate ids or options, dangling or
    /// misplaced follow-ups, option-less nodes without a label, or cycles.
    pub fn new(
        root: impl Into<String>,
        nodes: Vec<QuestionNode>,
    ) -> std::result::Result<Self, ConfigurationError> {
        let root = root.into();
        let mut by_id = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            if by_id.contains_key(&node.id) {
                return Err(ConfigurationError::DuplicateNode(node.id));
            }
            by_id.insert(node.id.clone(), node);
        }

        let tree = Self { root, nodes: by_id };
        tree.validate()?;
        Ok(tree)
    }

    pub fn from_definition(
        definition: TreeDefinition,
    ) -> std::result::Result<Self, ConfigurationError> {
        Self::new(definition.root, definition.nodes)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigurationError> {
        let definition: TreeDefinition =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse {
                what: "question tree".to_string(),
                message: e.to_string(),
            })?;
        Self::from_definition(definition)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, ConfigurationError> {
        let definition: TreeDefinition =
            toml::from_str(content).map_err(|e| ConfigurationError::Parse {
                what: "question tree".to_string(),
                message: e.to_string(),
            })?;
        Self::from_definition(definition)
    }

    /// Load a tree file. `.toml` files are read as TOML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the tree is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let tree = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            _ => Self::from_json(&content)?,
        };
        tracing::info!(path = %path.display(), questions = tree.len(), "loaded question tree");
        Ok(tree)
    }

    pub fn definition(&self) -> TreeDefinition {
        TreeDefinition {
            root: self.root.clone(),
            nodes: self.nodes.values().cloned().collect(),
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn root(&self) -> &QuestionNode {
        // validate() guarantees the root exists
        &self.nodes[&self.root]
    }

    pub fn node(&self, id: &str) -> Option<&QuestionNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &QuestionNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest number of answers needed to reach a label from the root.
    pub fn depth(&self) -> usize {
        self.depth_from(&self.root)
    }

    fn depth_from(&self, id: &str) -> usize {
        let Some(node) = self.nodes.get(id) else {
            return 0;
        };
        node.options
            .iter()
            .map(|option| match node.child_for(option) {
                Some(child) => 1 + self.depth_from(child),
                None => 1,
            })
            .max()
            .unwrap_or(0)
    }

    fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if !self.nodes.contains_key(&self.root) {
            return Err(ConfigurationError::UnknownRoot(self.root.clone()));
        }

        for node in self.nodes.values() {
            let mut seen = HashSet::with_capacity(node.options.len());
            for option in &node.options {
                if option.trim().is_empty() {
                    return Err(ConfigurationError::BlankOption(node.id.clone()));
                }
                if !seen.insert(option.as_str()) {
                    return Err(ConfigurationError::DuplicateOption {
                        question_id: node.id.clone(),
                        option: option.clone(),
                    });
                }
            }

            for (option, child) in &node.children {
                if !seen.contains(option.as_str()) {
                    return Err(ConfigurationError::ChildWithoutOption {
                        question_id: node.id.clone(),
                        option: option.clone(),
                    });
                }
                if !self.nodes.contains_key(child) {
                    return Err(ConfigurationError::UnknownChild {
                        question_id: node.id.clone(),
                        option: option.clone(),
                        child: child.clone(),
                    });
                }
            }

            if node.is_terminal() && node.terminal_label().is_none() {
                return Err(ConfigurationError::TerminalWithoutLabel(node.id.clone()));
            }
        }

        let mut reachable = HashSet::new();
        let mut path = Vec::new();
        self.check_acyclic(&self.root, &mut path, &mut reachable)?;

        for id in self.nodes.keys() {
            if !reachable.contains(id.as_str()) {
                tracing::warn!(question = %id, "question is not reachable from the root");
            }
        }

        Ok(())
    }

    fn check_acyclic<'a>(
        &'a self,
        id: &'a str,
        path: &mut Vec<&'a str>,
        reachable: &mut HashSet<&'a str>,
    ) -> std::result::Result<(), ConfigurationError> {
        if path.contains(&id) {
            return Err(ConfigurationError::Cycle(id.to_string()));
        }
        if !reachable.insert(id) {
            // Already fully explored through another branch.
            return Ok(());
        }

        path.push(id);
        for child in self.nodes[id].children.values() {
            self.check_acyclic(child, path, reachable)?;
        }
        path.pop();
        Ok(())
    }
}
