use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::recommendation::rule_scorer::Jitter;

const MAX_JITTER: f64 = 0.5;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a missing classifier artifact means rule-based scoring.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub model_path: Option<PathBuf>,
    pub encoders_path: Option<PathBuf>,
    pub jitter: Jitter,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            model_path: optional_env("MODEL_PATH").map(PathBuf::from),
            encoders_path: optional_env("ENCODERS_PATH").map(PathBuf::from),
            jitter: parse_jitter(
                optional_env("SCORING_JITTER").as_deref(),
                optional_env("SCORING_JITTER_SEED").as_deref(),
            )?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_jitter(amplitude: Option<&str>, seed: Option<&str>) -> Result<Jitter> {
    let amplitude = match amplitude {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .context("SCORING_JITTER must be a number")?,
        None => 0.0,
    };
    if !(0.0..=MAX_JITTER).contains(&amplitude) {
        bail!("SCORING_JITTER must be between 0 and {MAX_JITTER}, got {amplitude}");
    }
    let seed = seed
        .map(|raw| raw.trim().parse::<u64>())
        .transpose()
        .context("SCORING_JITTER_SEED must be an unsigned integer")?;

    if amplitude == 0.0 {
        return Ok(Jitter::Disabled);
    }
    Ok(Jitter::Uniform { amplitude, seed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_disabled_by_default() {
        assert_eq!(parse_jitter(None, None).unwrap(), Jitter::Disabled);
        assert_eq!(parse_jitter(Some("0"), Some("7")).unwrap(), Jitter::Disabled);
    }

    #[test]
    fn test_jitter_with_seed() {
        assert_eq!(
            parse_jitter(Some("0.05"), Some("42")).unwrap(),
            Jitter::Uniform {
                amplitude: 0.05,
                seed: Some(42)
            }
        );
        assert_eq!(
            parse_jitter(Some(" 0.1 "), None).unwrap(),
            Jitter::Uniform {
                amplitude: 0.1,
                seed: None
            }
        );
    }

    #[test]
    fn test_invalid_jitter_rejected() {
        assert!(parse_jitter(Some("lots"), None).is_err());
        assert!(parse_jitter(Some("-0.1"), None).is_err());
        assert!(parse_jitter(Some("0.9"), None).is_err());
        assert!(parse_jitter(Some("0.05"), Some("-1")).is_err());
    }
}
