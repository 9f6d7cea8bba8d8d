//! Configuration loading and validation.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ConfigError;

use super::types::Config;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "release_notes_config.json";

/// Load and validate configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    info!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        serde_json::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let config = finish(config)?;
    debug!(path = %path.display(), commit_types = config.commit_types.len(), "config loaded and validated");
    Ok(config)
}

/// Load and validate configuration from an in-memory JSON document.
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config =
        serde_json::from_str(content).map_err(|source| ConfigError::ParseFailed {
            path: "<inline>".into(),
            source,
        })?;

    finish(config)
}

fn finish(mut config: Config) -> Result<Config, ConfigError> {
    for (index, spec) in config.commit_types.iter_mut().enumerate() {
        spec.index = index;
    }
    validate_config(&config)?;
    Ok(config)
}

/// Check the values serde cannot check on its own.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !config.markdown_output_file_name.contains(".md") {
        return Err(invalid(
            "markdownOutputFileName",
            "enter a file name that ends in .md",
        ));
    }

    if !config.html_output_file_name.contains(".html") {
        return Err(invalid(
            "htmlOutputFileName",
            "enter a file name that ends in .html",
        ));
    }

    if config.commit_types.is_empty() {
        return Err(invalid("commitTypes", "at least one commit type is required"));
    }

    let mut seen = HashSet::new();
    for spec in &config.commit_types {
        if spec.conventional_name.trim().is_empty() {
            return Err(invalid(
                "commitTypes",
                &format!("empty 'conventionalType' at index {} (0-based)", spec.index),
            ));
        }
        if spec.section_title.trim().is_empty() {
            return Err(invalid(
                "commitTypes",
                &format!("empty 'markdownTitle' at index {} (0-based)", spec.index),
            ));
        }
        if !seen.insert(spec.conventional_name.as_str()) {
            warn!(
                commit_type = %spec.conventional_name,
                index = spec.index,
                "duplicate commit type, its commits will appear in more than one section"
            );
        }
    }

    if config.github_url.is_empty() || config.github_api_url.is_empty() {
        return Err(invalid("githubUrl", "GitHub URLs must not be empty"));
    }

    Ok(())
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
