//! Client-side section search.
//!
//! A section surfaces when the query signals its topic through the keyword
//! table, or when the query appears verbatim in one of its text fields.
//! Matching is a linear scan, cheap enough to rerun on every keystroke.
pub mod keywords;

use crate::catalog::{Category, Section};

/// Trim and case-fold a raw query.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filter `catalog` down to the sections matching `query`.
///
/// An empty query returns every section. Catalog order is preserved.
#[must_use]
pub fn filter<'a>(query: &str, catalog: &'a [Section]) -> Vec<&'a Section> {
    let query = normalize_query(query);
    if query.is_empty() {
        return catalog.iter().collect();
    }

    let topics = keywords::signalled_categories(&query);
    catalog
        .iter()
        .filter(|s| topics.contains(&s.category) || text_match(&query, s))
        .collect()
}

/// Whether the normalized query is a substring of any searchable field.
fn text_match(query: &str, section: &Section) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query);

    contains(&section.title)
        || contains(&section.intro)
        || section.points.iter().any(|p| {
            contains(&p.text)
                || p.definition.as_deref().is_some_and(contains)
                || p
                    .map_info
                    .as_ref()
                    .is_some_and(|m| contains(&m.region_name))
        })
}

/// A filtered view together with the query that produced it.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    pub query: String,
    pub matches: Vec<&'a Section>,
}

impl<'a> SearchOutcome<'a> {
    #[must_use]
    pub fn run(raw_query: &str, catalog: &'a [Section]) -> Self {
        Self {
            query: raw_query.trim().to_string(),
            matches: filter(raw_query, catalog),
        }
    }

    /// True when a non-empty query was given.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Topics the query signalled through the keyword table.
    #[must_use]
    pub fn matched_categories(&self) -> Vec<Category> {
        keywords::signalled_categories(&normalize_query(&self.query))
    }
}
