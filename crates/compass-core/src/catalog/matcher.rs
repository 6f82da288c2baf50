//! Label and free-text lookups against the catalog.
//!
//! - [`CatalogMatcher::roadmap_for`]: curated steps on an exact key hit,
//!   otherwise a five-step generic roadmap. Never fails.
//! - [`CatalogMatcher::institutions_for`]: institutions with at least one
//!   course overlapping the label after normalization, in either direction.
//! - [`CatalogMatcher::search`]: plain case-insensitive substring search over
//!   institutions or courses, or a roadmap lookup for careers.
//!
//! The matcher holds no mutable state, so every lookup is repeatable and the
//! matcher can be shared across threads.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::normalize::{normalize, overlaps};
use super::Catalog;

/// Where a roadmap's steps came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapSource {
    /// Stored in the catalog for this exact label.
    Curated,
    /// Generated from the generic template.
    Generic,
}

/// Ordered milestone steps for a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub label: String,
    pub steps: Vec<String>,
    pub source: RoadmapSource,
}

impl Roadmap {
    /// The five-step template used when no curated roadmap exists.
    pub fn generic(label: &str) -> Self {
        Self {
            label: label.to_string(),
            steps: vec![
                format!("Step 1: Explore basics of {label}"),
                format!("Step 2: Take relevant courses or certifications in {label}"),
                "Step 3: Gain practical experience through projects or internships".to_string(),
                "Step 4: Build portfolio and network".to_string(),
                format!("Step 5: Apply for professional opportunities in {label}"),
            ],
            source: RoadmapSource::Generic,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.source == RoadmapSource::Generic
    }
}

/// An institution offering at least one matching course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionMatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Courses of this institution that matched, in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_courses: Vec<String>,
}

impl fmt::Display for InstitutionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({})", self.name, location),
            None => f.write_str(&self.name),
        }
    }
}

/// A course and the institution offering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMatch {
    pub course: String,
    pub institution: String,
}

impl fmt::Display for CourseMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.course, self.institution)
    }
}

/// What a free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Institution,
    Course,
    Career,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchKind::Institution => "institution",
            SearchKind::Course => "course",
            SearchKind::Career => "career",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "institution" | "college" => Ok(SearchKind::Institution),
            "course" => Ok(SearchKind::Course),
            "career" => Ok(SearchKind::Career),
            other => Err(format!(
                "unknown search kind '{other}' (expected institution, course, or career)"
            )),
        }
    }
}

/// Results of [`CatalogMatcher::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "results", rename_all = "snake_case")]
pub enum SearchResults {
    Institutions(Vec<InstitutionMatch>),
    Courses(Vec<CourseMatch>),
    Career(Roadmap),
}

impl SearchResults {
    /// True when an institution or course search found nothing.
    /// Career searches always produce a roadmap.
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResults::Institutions(found) => found.is_empty(),
            SearchResults::Courses(found) => found.is_empty(),
            SearchResults::Career(_) => false,
        }
    }
}

/// Read-only lookups over a shared catalog.
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    catalog: Arc<Catalog>,
}

impl CatalogMatcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Curated roadmap for exactly `label` (case-sensitive), or the generic
    /// template with `label` filled in.
    pub fn roadmap_for(&self, label: &str) -> Roadmap {
        match self.catalog.roadmap(label) {
            Some(steps) => Roadmap {
                label: label.to_string(),
                steps: steps.to_vec(),
                source: RoadmapSource::Curated,
            },
            None => {
                tracing::debug!(label, "no curated roadmap, using generic template");
                Roadmap::generic(label)
            }
        }
    }

    /// Institutions offering a course that overlaps `label` once both are
    /// normalized. Each institution appears once, in catalog order.
    ///
    /// Matching is deliberately loose: "CSE" matches "B.Tech CSE", and a
    /// short label can match unrelated longer course names. A label that is
    /// empty after normalization (e.g. `"..."`) matches nothing.
    pub fn institutions_for(&self, label: &str) -> Vec<InstitutionMatch> {
        let wanted = normalize(label);
        let mut seen = HashSet::new();
        let mut matches: Vec<InstitutionMatch> = Vec::new();

        for entry in self.catalog.colleges() {
            let matched_courses: Vec<String> = entry
                .courses
                .iter()
                .filter(|course| overlaps(&wanted, &normalize(course)))
                .cloned()
                .collect();
            if matched_courses.is_empty() {
                continue;
            }

            if seen.insert(entry.name.as_str()) {
                matches.push(InstitutionMatch {
                    name: entry.name.clone(),
                    location: entry.location.clone(),
                    matched_courses,
                });
            } else if let Some(existing) = matches.iter_mut().find(|m| m.name == entry.name) {
                // Same institution listed twice in the catalog.
                existing.matched_courses.extend(matched_courses);
                if existing.location.is_none() {
                    existing.location = entry.location.clone();
                }
            }
        }

        tracing::debug!(label, found = matches.len(), "matched institutions");
        matches
    }

    /// Free-text search.
    ///
    /// Institution and course searches use case-insensitive substring
    /// matching on the raw text (no punctuation stripping). Career searches
    /// behave like [`roadmap_for`](Self::roadmap_for).
    pub fn search(&self, query: &str, kind: SearchKind) -> SearchResults {
        let needle = query.to_lowercase();
        match kind {
            SearchKind::Institution => SearchResults::Institutions(
                self.catalog
                    .colleges()
                    .iter()
                    .filter(|entry| entry.name.to_lowercase().contains(&needle))
                    .map(|entry| InstitutionMatch {
                        name: entry.name.clone(),
                        location: entry.location.clone(),
                        matched_courses: Vec::new(),
                    })
                    .collect(),
            ),
            SearchKind::Course => SearchResults::Courses(
                self.catalog
                    .colleges()
                    .iter()
                    .flat_map(|entry| {
                        entry.courses.iter().map(move |course| (entry, course))
                    })
                    .filter(|(_, course)| course.to_lowercase().contains(&needle))
                    .map(|(entry, course)| CourseMatch {
                        course: course.clone(),
                        institution: entry.name.clone(),
                    })
                    .collect(),
            ),
            SearchKind::Career => SearchResults::Career(self.roadmap_for(query)),
        }
    }
}
