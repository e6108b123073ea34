// src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_IDENTITY_FILE: &str = ".etantara/identity.json";
pub const DEFAULT_SHARE_POINTS_THRESHOLD: i64 = 100;
pub const DEFAULT_POINTS_REFRESH_DELAY_MS: u64 = 500;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API. Always ends with `/`.
    pub api_base: Url,
    pub identity_file: PathBuf,
    pub share_points_threshold: i64,
    pub points_refresh_delay: Duration,
    /// `None` disables the per-request timeout.
    pub http_timeout: Option<Duration>,
    pub rust_log: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let api_base = env::var("ETANTARA_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_base = normalize_base(&api_base)?;

        let identity_file = env::var("ETANTARA_IDENTITY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_IDENTITY_FILE));

        let share_points_threshold =
            parse_var("SHARE_POINTS_THRESHOLD", DEFAULT_SHARE_POINTS_THRESHOLD)?;

        let points_refresh_delay = Duration::from_millis(parse_var(
            "POINTS_REFRESH_DELAY_MS",
            DEFAULT_POINTS_REFRESH_DELAY_MS,
        )?);

        let http_timeout = match parse_var("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)? {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            api_base,
            identity_file,
            share_points_threshold,
            points_refresh_delay,
            http_timeout,
            rust_log,
            log_dir,
        })
    }

    /// Configuration pointing at `api_base` with every other setting at its default.
    /// Handy for tests that spin up a local server.
    pub fn for_base(api_base: &str) -> Result<Self, AppError> {
        Ok(Self {
            api_base: normalize_base(api_base)?,
            identity_file: PathBuf::from(DEFAULT_IDENTITY_FILE),
            share_points_threshold: DEFAULT_SHARE_POINTS_THRESHOLD,
            points_refresh_delay: Duration::from_millis(DEFAULT_POINTS_REFRESH_DELAY_MS),
            http_timeout: Some(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
        })
    }
}

/// Parses the base URL and makes sure its path ends with a slash,
/// so that `Url::join` keeps the `/api` prefix.
pub fn normalize_base(raw: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::Config(format!("invalid ETANTARA_API_BASE '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!("'{}' cannot be used as a base URL", raw)));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_appends_slash() {
        let url = normalize_base("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
        assert_eq!(url.join("quiz").unwrap().as_str(), "http://localhost:8080/api/quiz");
    }

    #[test]
    fn test_normalize_base_keeps_existing_slash() {
        let url = normalize_base("https://etantara.mg/api/").unwrap();
        assert_eq!(url.as_str(), "https://etantara.mg/api/");
    }

    #[test]
    fn test_normalize_base_rejects_garbage() {
        assert!(matches!(normalize_base("not a url"), Err(AppError::Config(_))));
        assert!(matches!(normalize_base("mailto:someone@example.com"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_for_base_defaults() {
        let config = Config::for_base("http://127.0.0.1:9000").unwrap();
        assert_eq!(config.api_base.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.share_points_threshold, 100);
        assert_eq!(config.points_refresh_delay, Duration::from_millis(500));
    }
}
