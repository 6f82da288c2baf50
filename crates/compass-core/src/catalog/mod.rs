//! Institution catalog and curated roadmaps.
//!
//! The catalog is loaded once, validated, and then only read. It is stored in
//! the JSON layout:
//!
//! ```json
//! {
//!   "colleges": [{ "name": "...", "location": "...", "courses": ["..."] }],
//!   "careers": { "label": ["step", "..."] },
//!   "notifications": [{ "msg": "..." }]
//! }
//! ```
//!
//! `location`, `careers`, and `notifications` are optional.

pub mod matcher;
pub mod normalize;

pub use matcher::{
    CatalogMatcher, CourseMatch, InstitutionMatch, Roadmap, RoadmapSource, SearchKind,
    SearchResults,
};
pub use normalize::{normalize, overlaps};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigurationError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// An institution and the courses it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-text course names, as curated.
    #[serde(default)]
    pub courses: Vec<String>,
}

impl CatalogEntry {
    pub fn new<I, S>(name: impl Into<String>, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            location: None,
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A static announcement shipped with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub msg: String,
}

/// Validated, read-only catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    colleges: Vec<CatalogEntry>,
    /// Curated roadmaps keyed by exact label.
    careers: IndexMap<String, Vec<String>>,
    notifications: Vec<Notification>,
}

/// Catalog as read from disk, before validation.
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    colleges: Vec<CatalogEntry>,
    #[serde(default)]
    careers: IndexMap<String, Vec<String>>,
    #[serde(default)]
    notifications: Vec<Notification>,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// Blank locations are dropped. Blank institution names, blank course
    /// strings, and curated roadmaps without steps are rejected.
    pub fn new(
        colleges: Vec<CatalogEntry>,
        careers: IndexMap<String, Vec<String>>,
        notifications: Vec<Notification>,
    ) -> std::result::Result<Self, ConfigurationError> {
        Self {
            colleges,
            careers,
            notifications,
        }
        .validated()
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigurationError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse {
                what: "catalog".to_string(),
                message: e.to_string(),
            })?;
        Self::new(raw.colleges, raw.careers, raw.notifications)
    }

    /// Load a catalog JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            institutions = catalog.colleges.len(),
            roadmaps = catalog.careers.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the library.
    pub fn builtin() -> std::result::Result<Self, ConfigurationError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn colleges(&self) -> &[CatalogEntry] {
        &self.colleges
    }

    pub fn careers(&self) -> &IndexMap<String, Vec<String>> {
        &self.careers
    }

    /// Curated steps for exactly `label`, if any.
    pub fn roadmap(&self, label: &str) -> Option<&[String]> {
        self.careers.get(label).map(Vec::as_slice)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn validated(mut self) -> std::result::Result<Self, ConfigurationError> {
        for (index, entry) in self.colleges.iter_mut().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigurationError::BlankInstitution { index });
            }
            if entry.courses.iter().any(|c| c.trim().is_empty()) {
                return Err(ConfigurationError::BlankCourse {
                    institution: entry.name.clone(),
                });
            }
            if entry.location.as_deref().is_some_and(|l| l.trim().is_empty()) {
                entry.location = None;
            }
        }

        if let Some((label, _)) = self.careers.iter().find(|(_, steps)| steps.is_empty()) {
            return Err(ConfigurationError::EmptyRoadmap(label.clone()));
        }

        Ok(self)
    }
}
