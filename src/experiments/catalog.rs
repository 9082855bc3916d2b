//! Owning experiment collection with pure filtering.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::experiments::model::Experiment;

/// In-memory experiment list loaded from the synced metadata document.
///
/// The catalog owns its records; filtering borrows from it instead of
/// mutating shared state.
#[derive(Debug, Default)]
pub struct Catalog {
    experiments: Vec<Experiment>,
}

impl Catalog {
    pub fn new(experiments: Vec<Experiment>) -> Self {
        Self { experiments }
    }

    /// Load the catalog from a metadata JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Data(format!(
                    "Experiment data not found at {}. Run a sync first.",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let experiments: Vec<Experiment> = serde_json::from_str(&content)?;
        Ok(Self { experiments })
    }

    pub fn all(&self) -> &[Experiment] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Experiments matching a free-text query.
    ///
    /// An empty or whitespace-only query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Experiment> {
        let query = query.trim();
        if query.is_empty() {
            return self.experiments.iter().collect();
        }

        self.experiments
            .iter()
            .filter(|experiment| experiment.matches(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Experiment {
                title: "Backpulver-Vulkan".to_string(),
                description: "Ein sprudelnder Vulkan".to_string(),
                ingredients: vec![],
                steps: vec!["Essig dazugiessen".to_string()],
            },
            Experiment {
                title: "Regenbogen im Glas".to_string(),
                description: "Zuckerwasser in Schichten".to_string(),
                ingredients: vec![],
                steps: vec!["Zucker abwiegen".to_string()],
            },
        ])
    }

    #[test]
    fn test_empty_query_returns_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").len(), 2);
        assert_eq!(catalog.search("   ").len(), 2);
    }

    #[test]
    fn test_search_by_title() {
        let catalog = sample_catalog();
        let matches = catalog.search("regenbogen");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Regenbogen im Glas");
    }

    #[test]
    fn test_search_by_step() {
        let catalog = sample_catalog();
        let matches = catalog.search("abwiegen");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Regenbogen im Glas");
    }

    #[test]
    fn test_search_without_match() {
        let catalog = sample_catalog();
        assert!(catalog.search("magnet").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Test", "description": "", "ingredients": [], "steps": []}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].title, "Test");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/_experiments.json")).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
