use std::path::PathBuf;

use anyhow::{Context, Result, bail};

const APP_DIR_NAME: &str = "multiagent-brainstorm";
const LOG_FILE_NAME: &str = "brainstorm.log";

/// Default log file location (`<cache dir>/multiagent-brainstorm/brainstorm.log`)
pub fn default_log_path() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Validate a backend base URL and strip trailing slashes
pub fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("API URL must not be empty");
    }
    let Some((scheme, rest)) = trimmed.split_once("://") else {
        bail!("API URL must start with http:// or https://: {}", raw);
    };
    if !matches!(scheme, "http" | "https") {
        bail!("Unsupported API URL scheme '{}' (expected http or https)", scheme);
    }
    if rest.is_empty() {
        bail!("API URL is missing a host: {}", raw);
    }
    Ok(trimmed.to_string())
}
