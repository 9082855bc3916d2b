//! Experiment record model.

use serde::Deserialize;

/// One experiment (or recipe) record from the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experiment {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub steps: Vec<String>,
}

impl Experiment {
    /// Case-insensitive substring match of a query against title,
    /// description, and steps. Ingredients are listed but not searched.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .steps
                .iter()
                .any(|step| step.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Experiment {
        Experiment {
            title: "Backpulver-Vulkan".to_string(),
            description: "Ein sprudelnder Vulkan aus Essig und Backpulver".to_string(),
            ingredients: vec!["Essig".to_string(), "Backpulver".to_string()],
            steps: vec![
                "Backpulver in das Glas geben".to_string(),
                "Essig dazugiessen".to_string(),
            ],
        }
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        assert!(sample().matches("vulkan"));
        assert!(sample().matches("VULKAN"));
    }

    #[test]
    fn test_matches_description() {
        assert!(sample().matches("sprudelnder"));
    }

    #[test]
    fn test_matches_steps() {
        assert!(sample().matches("glas"));
    }

    #[test]
    fn test_ingredients_not_searched() {
        let mut experiment = sample();
        experiment.ingredients = vec!["Zitronensaft".to_string()];
        assert!(!experiment.matches("zitronensaft"));
    }

    #[test]
    fn test_no_match() {
        assert!(!sample().matches("magnet"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let experiment: Experiment =
            serde_json::from_str(r#"{"title": "Nur Titel"}"#).unwrap();
        assert_eq!(experiment.title, "Nur Titel");
        assert!(experiment.description.is_empty());
        assert!(experiment.steps.is_empty());
    }
}
