use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Settings for the remote text-completion service.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// `None` means the service is unconfigured; insight actions degrade
    /// to a fixed message instead of calling out.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            temperature: 0.4,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub genai: GenAiConfig,
    pub model_dir: PathBuf,
    pub report_output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            genai: GenAiConfig::default(),
            model_dir: PathBuf::from("model"),
            report_output_path: PathBuf::from("Business_Report.pdf"),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_key = lookup("GROQ_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = lookup("GROQ_BASE_URL")
            .unwrap_or(defaults.genai.base_url)
            .trim_end_matches('/')
            .to_string();

        let model = lookup("GROQ_MODEL").unwrap_or(defaults.genai.model);

        let temperature = parse_or("GENAI_TEMPERATURE", &lookup, defaults.genai.temperature)?;
        if !(0.0..=2.0).contains(&temperature) {
            anyhow::bail!(
                "Invalid GENAI_TEMPERATURE: {}. Must be between 0.0 and 2.0",
                temperature
            );
        }

        let timeout_secs = parse_or("GENAI_TIMEOUT_SECS", &lookup, defaults.genai.timeout_secs)?;

        let model_dir = lookup("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_dir);

        let report_output_path = lookup("REPORT_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.report_output_path);

        Ok(Self {
            genai: GenAiConfig {
                api_key,
                base_url,
                model,
                temperature,
                timeout_secs,
            },
            model_dir,
            report_output_path,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.genai.api_key.is_none());
        assert_eq!(config.genai.model, DEFAULT_GROQ_MODEL);
        assert_eq!(config.genai.temperature, 0.4);
        assert_eq!(config.model_dir, PathBuf::from("model"));
        assert_eq!(
            config.report_output_path,
            PathBuf::from("Business_Report.pdf")
        );
    }

    #[test]
    fn test_blank_api_key_is_unconfigured() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")])).unwrap();
        assert!(config.genai.api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_BASE_URL", "http://localhost:8080/v1/"),
            ("GENAI_TEMPERATURE", "0.2"),
            ("GENAI_TIMEOUT_SECS", "5"),
            ("MODEL_DIR", "/opt/models"),
        ]))
        .unwrap();

        assert_eq!(config.genai.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.genai.base_url, "http://localhost:8080/v1");
        assert_eq!(config.genai.temperature, 0.2);
        assert_eq!(config.genai.timeout_secs, 5);
        assert_eq!(config.model_dir, PathBuf::from("/opt/models"));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("GENAI_TEMPERATURE", "hot")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("GENAI_TEMPERATURE", "3.5")])).is_err());
    }
}
