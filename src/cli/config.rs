//! Configuration for interactive sessions

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ai::Difficulty, game::Mark};

/// Settings for an interactive session.
///
/// Can be loaded from a JSON file; missing fields fall back to the defaults
/// (hard AI playing O, unseeded, spinner on). Command-line flags are applied
/// on top.
///
/// ```json
/// { "difficulty": "medium", "ai_mark": "X", "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Strength of the AI opponent
    pub difficulty: Difficulty,

    /// Mark controlled by the AI in human-vs-AI games
    pub ai_mark: Mark,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show a spinner while the AI searches
    pub spinner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ai_mark: Mark::O,
            seed: None,
            spinner: true,
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be opened and
    /// [`crate::Error::Serialization`] if it is not valid configuration JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_ai_mark(mut self, mark: Mark) -> Self {
        self.ai_mark = mark;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.ai_mark, Mark::O);
        assert_eq!(config.seed, None);
        assert!(config.spinner);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "difficulty": "easy", "seed": 42 }}"#).unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ai_mark, Mark::O);
        assert!(config.spinner);
    }

    #[test]
    fn test_load_rejects_unknown_difficulty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "difficulty": "brutal" }}"#).unwrap();

        let err = SessionConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("open config file"));
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_difficulty(Difficulty::Medium)
            .with_ai_mark(Mark::X)
            .with_seed(9)
            .with_spinner(false);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.ai_mark, Mark::X);
        assert_eq!(config.seed, Some(9));
        assert!(!config.spinner);
    }
}
