use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.moonshot.cn/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "moonshot-v1-8k";

/// Application configuration loaded from environment variables.
/// Startup fails if `LLM_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    /// `None` when `BIAS_FILE` is set to an empty string: the bias document lives in memory.
    pub bias_file: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: require_env("LLM_API_KEY")?,
            llm_api_url: env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_temperature: env_or("LLM_TEMPERATURE", "0.7")
                .parse::<f32>()
                .context("LLM_TEMPERATURE must be a number")?,
            bias_file: bias_file_from(&env_or("BIAS_FILE", "bias.md")),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static")),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn bias_file_from(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_file_path_is_kept() {
        assert_eq!(bias_file_from("data/bias.md"), Some(PathBuf::from("data/bias.md")));
    }

    #[test]
    fn test_empty_bias_file_means_in_memory() {
        assert_eq!(bias_file_from(""), None);
        assert_eq!(bias_file_from("   "), None);
    }
}
