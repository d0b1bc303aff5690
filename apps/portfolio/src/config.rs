use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory served under `/assets` (project photos, favicon).
    pub assets_dir: PathBuf,
    /// Delay before a page showing a slideshow moves to its next slide.
    pub slideshow_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
            slideshow_interval: parse_slideshow_secs(
                std::env::var("SLIDESHOW_SECS").ok().as_deref(),
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            assets_dir: PathBuf::from("assets"),
            slideshow_interval: Duration::from_secs(DEFAULT_SLIDESHOW_SECS),
        }
    }
}

const DEFAULT_SLIDESHOW_SECS: u64 = 30;

fn parse_slideshow_secs(raw: Option<&str>) -> Result<Duration> {
    let secs = match raw {
        None => DEFAULT_SLIDESHOW_SECS,
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("SLIDESHOW_SECS must be an integer, got '{value}'"))?,
    };
    if secs == 0 {
        bail!("SLIDESHOW_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slideshow_secs_defaults_to_thirty() {
        assert_eq!(parse_slideshow_secs(None).unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_slideshow_secs_parses_value() {
        assert_eq!(parse_slideshow_secs(Some(" 5 ")).unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_slideshow_secs_rejects_zero_and_garbage() {
        assert!(parse_slideshow_secs(Some("0")).is_err());
        assert!(parse_slideshow_secs(Some("soon")).is_err());
    }
}
