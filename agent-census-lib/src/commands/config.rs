use crate::Result;
use crate::census::{ActivityMetric, Actor, Pacing};
use crate::search::DEFAULT_API_BASE_URL;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Configuration file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "census.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the analysis record is written
    #[serde(default = "default_output")]
    pub output: Utf8PathBuf,

    /// Root of the search API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whole-history metrics collected for each actor
    #[serde(default = "default_enabled_metrics")]
    pub enabled_metrics: Vec<ActivityMetric>,

    /// Delays and retry limits
    #[serde(default)]
    pub pacing: Pacing,

    /// Actors to measure, in report order
    #[serde(default)]
    pub actors: Vec<Actor>,
}

fn default_output() -> Utf8PathBuf {
    Utf8PathBuf::from("data/ai_assistant_github_analysis.json")
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_enabled_metrics() -> Vec<ActivityMetric> {
    ActivityMetric::DEFAULT_ENABLED.to_vec()
}

impl Config {
    /// The configuration embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML does not describe a valid configuration
    pub fn builtin() -> Result<Self> {
        let config: Self = toml::from_str(DEFAULT_CONFIG_TOML).into_app_err("parsing the built-in default configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `census.toml` in the current directory is used when it
    /// exists and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = Utf8PathBuf::from(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::builtin(),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.actors.is_empty() {
            return Err(app_err!("the configuration must list at least one actor"));
        }

        let mut names = HashSet::new();
        for actor in &self.actors {
            if actor.display_name.trim().is_empty() {
                return Err(app_err!("actor display names must not be empty"));
            }

            if !names.insert(actor.display_name.as_str()) {
                return Err(app_err!("duplicate actor display name '{}'", actor.display_name));
            }
        }

        let mut metrics = HashSet::new();
        for metric in &self.enabled_metrics {
            if !metrics.insert(metric) {
                return Err(app_err!("metric '{metric}' is enabled more than once"));
            }
        }

        let url = Url::parse(&self.api_base_url).map_err(|e| app_err!("invalid api_base_url '{}': {e}", self.api_base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("api_base_url must be an http or https URL, got '{}'", self.api_base_url));
        }

        if self.pacing.max_attempts == 0 {
            return Err(app_err!("pacing.max_attempts must be at least 1"));
        }

        Ok(())
    }
}
