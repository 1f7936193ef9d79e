use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_NAME_CHARS: usize = 64;

/// Names used by the demonstration. Every field is optional in the file;
/// missing ones fall back to the built-in roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub abstract_animal: String,
    pub mammal: String,
    pub dog: DogEntry,
    pub bulldog: String,
    pub featured_bulldog: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DogEntry {
    pub name: String,
    pub breed: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            abstract_animal: "Абстрактное животное".to_string(),
            mammal: "Кенгуру".to_string(),
            dog: DogEntry::default(),
            bulldog: "Бруно".to_string(),
            featured_bulldog: "Чарли".to_string(),
        }
    }
}

impl Default for DogEntry {
    fn default() -> Self {
        Self {
            name: "Рекс".to_string(),
            breed: "Овчарка".to_string(),
        }
    }
}

impl RosterConfig {
    /// Load a roster from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn named_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("abstract_animal", &self.abstract_animal),
            ("mammal", &self.mammal),
            ("dog.name", &self.dog.name),
            ("dog.breed", &self.dog.breed),
            ("bulldog", &self.bulldog),
            ("featured_bulldog", &self.featured_bulldog),
        ]
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in self.named_fields() {
            validate_non_empty_string(field, value)?;
            validate_max_length(field, value, MAX_NAME_CHARS)?;
        }
        Ok(())
    }
}
