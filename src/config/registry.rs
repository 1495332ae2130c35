//! Registry seed configuration.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, GradeResult, ScoringPreferences};
use crate::util::load_dotenv;

/// Environment variable holding the path of a JSON registry configuration.
pub const CONFIG_PATH_ENV: &str = "GRADEKEEPER_CONFIG";

const fn default_extra_credit_bonus() -> f64 {
    0.02
}

/// One teacher to create at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherConfig {
    /// Teacher name, unique within the registry.
    pub name: String,
    /// Assignment weight.
    pub weight_assignments: f64,
    /// Exam weight.
    pub weight_exams: f64,
    /// Bonus per extra credit.
    #[serde(default = "default_extra_credit_bonus")]
    pub extra_credit_bonus: f64,
}

/// Root registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Teachers to seed, in order.
    #[serde(default)]
    pub teachers: Vec<TeacherConfig>,
}

impl TeacherConfig {
    /// Build the scoring preferences described by this entry.
    ///
    /// # Errors
    ///
    /// Fails when the weights do not sum to one.
    pub fn preferences(&self) -> GradeResult<ScoringPreferences> {
        ScoringPreferences::new(
            self.weight_assignments,
            self.weight_exams,
            self.extra_credit_bonus,
        )
    }

    /// Validate the name and weights.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        self.preferences().map(|_| ()).map_err(|e| e.to_string())
    }
}

impl RegistryConfig {
    /// Validate every teacher and ensure names are unique.
    ///
    /// # Errors
    ///
    /// Returns a description naming the offending teacher.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for teacher in &self.teachers {
            teacher
                .validate()
                .map_err(|e| format!("teacher `{}` invalid: {e}", teacher.name))?;
            if !seen.insert(teacher.name.as_str()) {
                return Err(format!("teacher `{}` defined more than once", teacher.name));
            }
        }
        Ok(())
    }

    /// Parse registry configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, parsed or validated.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading registry config {}", path.display()))?;
        Self::from_json_str(&raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading registry config {}", path.display()))
    }

    /// Load configuration from the file named by [`CONFIG_PATH_ENV`], after
    /// applying any `.env` file. An unset variable yields an empty config.
    ///
    /// # Errors
    ///
    /// Fails if the named file cannot be loaded.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = load_dotenv() {
            tracing::warn!("ignoring unreadable .env file: {e}");
        }
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => {
                tracing::debug!("{CONFIG_PATH_ENV} not set, starting with an empty registry");
                Ok(Self::default())
            }
        }
    }
}
