//! Curriculum catalog: the ordered, immutable list of sections.
//!
//! The catalog is loaded once at start, either from the bundled curriculum
//! or from a JSON file named in the configuration.
pub mod models;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use models::{
    Activities, Activity, Category, FocusKind, GeoFocus, Landmark, Point, RegionalImpact,
    RiskLevel, Section, Source,
};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate section id: {0}")]
    DuplicateId(String),

    #[error("section at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Build a catalog from sections, checking that ids are non-empty and unique.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (pos, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateId(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// The curriculum bundled with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_json_str(data: &str) -> Result<Self, CatalogError> {
        let sections: Vec<Section> = serde_json::from_str(data)?;
        Self::new(sections)
    }

    /// Load a catalog from a JSON file containing an array of sections.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&data)?;
        info!(
            "Loaded catalog from {} ({} sections)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise fall back to the bundled curriculum.
    pub fn load_or_embedded(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::embedded(),
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, category: Category) -> Section {
        Section {
            id: id.to_string(),
            category,
            title: format!("title {id}"),
            intro: String::new(),
            points: Vec::new(),
            activities: None,
            sources: Vec::new(),
            is_map_section: false,
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        let ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "intro",
                "environmental",
                "political",
                "economic",
                "social",
                "technological"
            ]
        );
        for s in catalog.sections() {
            assert!(s.has_detail(), "section {} should have points", s.id);
        }
    }

    #[test]
    fn test_embedded_categories_match_ids() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(
            catalog.get("intro").unwrap().category,
            Category::Introduction
        );
        assert_eq!(
            catalog.get("technological").unwrap().category,
            Category::Technological
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![
            section("a", Category::Social),
            section("a", Category::Economic),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = Catalog::new(vec![section("ok", Category::Social), section("  ", Category::Social)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(1)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": "env", "category": "environmental", "title": "البيئة", "intro": "..."}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("env").unwrap().title, "البيئة");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
