//! Per-section activity completion, kept in memory for one session.
use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Individual,
    Group,
}

impl std::str::FromStr for ActivityKind {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" | "فردي" => Ok(ActivityKind::Individual),
            "group" | "جماعي" => Ok(ActivityKind::Group),
            other => Err(ProgressError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProgressError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("section {0} has no activities")]
    NoActivities(String),

    #[error("unknown activity kind: {0} (expected individual or group)")]
    UnknownKind(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ActivityState {
    individual: bool,
    group: bool,
}

impl ActivityState {
    fn slot(&mut self, kind: ActivityKind) -> &mut bool {
        match kind {
            ActivityKind::Individual => &mut self.individual,
            ActivityKind::Group => &mut self.group,
        }
    }
}

#[derive(Debug, Default)]
pub struct Progress {
    states: HashMap<String, ActivityState>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an activity's completion and return the new state.
    pub fn toggle(
        &mut self,
        catalog: &Catalog,
        section_id: &str,
        kind: ActivityKind,
    ) -> Result<bool, ProgressError> {
        let section = catalog
            .get(section_id)
            .ok_or_else(|| ProgressError::UnknownSection(section_id.to_string()))?;
        if section.activities.is_none() {
            return Err(ProgressError::NoActivities(section_id.to_string()));
        }

        let slot = self
            .states
            .entry(section_id.to_string())
            .or_default()
            .slot(kind);
        *slot = !*slot;
        Ok(*slot)
    }

    #[must_use]
    pub fn is_done(&self, section_id: &str, kind: ActivityKind) -> bool {
        self.states
            .get(section_id)
            .is_some_and(|s| match kind {
                ActivityKind::Individual => s.individual,
                ActivityKind::Group => s.group,
            })
    }

    /// Both activities of the section are done.
    #[must_use]
    pub fn is_complete(&self, section_id: &str) -> bool {
        self.states
            .get(section_id)
            .is_some_and(|s| s.individual && s.group)
    }

    /// Ids of fully completed sections, in catalog order.
    #[must_use]
    pub fn completed_sections<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog
            .sections()
            .iter()
            .filter(|s| self.is_complete(&s.id))
            .map(|s| s.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let catalog = Catalog::embedded().unwrap();
        let mut progress = Progress::new();

        assert!(progress.toggle(&catalog, "social", ActivityKind::Group).unwrap());
        assert!(progress.is_done("social", ActivityKind::Group));
        assert!(!progress.toggle(&catalog, "social", ActivityKind::Group).unwrap());
        assert!(!progress.is_done("social", ActivityKind::Group));
    }

    #[test]
    fn test_complete_requires_both() {
        let catalog = Catalog::embedded().unwrap();
        let mut progress = Progress::new();

        progress.toggle(&catalog, "economic", ActivityKind::Individual).unwrap();
        assert!(!progress.is_complete("economic"));
        progress.toggle(&catalog, "economic", ActivityKind::Group).unwrap();
        progress.toggle(&catalog, "intro", ActivityKind::Group).unwrap();
        progress.toggle(&catalog, "intro", ActivityKind::Individual).unwrap();

        assert!(progress.is_complete("economic"));
        assert_eq!(progress.completed_sections(&catalog), vec!["intro", "economic"]);
    }

    #[test]
    fn test_unknown_section() {
        let catalog = Catalog::embedded().unwrap();
        let err = Progress::new()
            .toggle(&catalog, "nowhere", ActivityKind::Group)
            .unwrap_err();
        assert_eq!(err, ProgressError::UnknownSection("nowhere".to_string()));
    }

    #[test]
    fn test_section_without_activities() {
        let catalog = Catalog::from_json_str(
            r#"[{"id": "bare", "category": "social", "title": "t", "intro": "i"}]"#,
        )
        .unwrap();
        let err = Progress::new()
            .toggle(&catalog, "bare", ActivityKind::Individual)
            .unwrap_err();
        assert_eq!(err, ProgressError::NoActivities("bare".to_string()));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("Group".parse::<ActivityKind>().unwrap(), ActivityKind::Group);
        assert_eq!("فردي".parse::<ActivityKind>().unwrap(), ActivityKind::Individual);
        assert!("both".parse::<ActivityKind>().is_err());
    }
}
