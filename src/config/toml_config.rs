use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = "./portfolio-data";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub generative: GenerativeSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminSettings {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerativeSettings {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Empty values and `${VAR}` placeholders left unresolved count as unset.
fn resolved(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !(v.starts_with("${") && v.ends_with('}')))
}

impl StorageSettings {
    pub fn data_dir(&self) -> &str {
        resolved(&self.data_dir).unwrap_or(DEFAULT_DATA_DIR)
    }
}

impl AdminSettings {
    pub fn password(&self) -> &str {
        resolved(&self.password).unwrap_or(DEFAULT_ADMIN_PASSWORD)
    }
}

impl GenerativeSettings {
    pub fn endpoint(&self) -> &str {
        resolved(&self.endpoint).unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn model(&self) -> &str {
        resolved(&self.model).unwrap_or(DEFAULT_MODEL)
    }

    pub fn api_key(&self) -> Option<&str> {
        resolved(&self.api_key)
    }
}

impl FolioConfig {
    /// Read and parse a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration text, substituting `${VAR}` from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Load `path` when it exists, otherwise start from defaults. Environment
    /// fallbacks are applied either way.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            Self::from_file(path)?
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env_fallbacks();
        Ok(config)
    }

    /// `GEMINI_API_KEY` and `ADMIN_PASSWORD` fill in values the file left unset.
    pub fn apply_env_fallbacks(&mut self) {
        if self.generative.api_key().is_none() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                self.generative.api_key = Some(key);
            }
        }
        if resolved(&self.admin.password).is_none() {
            if let Ok(password) = std::env::var("ADMIN_PASSWORD") {
                self.admin.password = Some(password);
            }
        }
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FolioError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("generative.endpoint", self.generative.endpoint())?;
        validation::validate_path("storage.data_dir", self.storage.data_dir())?;
        validation::validate_non_empty_string("generative.model", self.generative.model())?;

        if let Some(timeout) = self.generative.timeout_seconds {
            validation::validate_positive_number("generative.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl Validate for FolioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
