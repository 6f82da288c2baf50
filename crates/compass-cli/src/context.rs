//! Loads the catalog and question tree a command runs against.
//!
//! Precedence for each data file: command-line flag, then the config file,
//! then the data built into the library.

use std::path::PathBuf;
use std::sync::Arc;

use compass_core::{builtin_tree, Catalog, CatalogMatcher, Config, QuestionTree, QuizEngine};

use crate::DataArgs;

pub struct Context {
    pub config: Config,
    catalog: Arc<Catalog>,
    tree_path: Option<PathBuf>,
}

impl Context {
    /// Load config and catalog. The question tree is loaded separately by
    /// [`Context::engine`], since only the quiz needs it.
    pub fn load(args: &DataArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();

        let catalog = match args.catalog.clone().or_else(|| config.catalog_path()) {
            Some(path) => Catalog::load(&path)?,
            None => {
                tracing::debug!("using built-in catalog");
                Catalog::builtin()?
            }
        };

        let tree_path = args.tree.clone().or_else(|| config.tree_path());

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            tree_path,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matcher(&self) -> CatalogMatcher {
        CatalogMatcher::new(Arc::clone(&self.catalog))
    }

    pub fn engine(&self) -> Result<QuizEngine, Box<dyn std::error::Error>> {
        let tree = match &self.tree_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading question tree");
                QuestionTree::load(path)?
            }
            None => builtin_tree()?,
        };
        Ok(QuizEngine::new(tree))
    }
}
