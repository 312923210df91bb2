//! Bring an existing configuration file up to date.
//!
//! Older files miss the keys added in later releases (the travel constants
//! were introduced after `database`/`separator_char`). Missing keys are
//! filled with their defaults; keys already present are never touched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Return the names of the top-level keys missing from `content`,
/// together with the completed YAML document.
pub fn complete_yaml(content: &str) -> AppResult<(Vec<String>, String)> {
    let mut doc: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(content)?
    };

    let map = doc
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("configuration root must be a mapping".into()))?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let Some(default_map) = defaults.as_mapping() else {
        return Err(AppError::Config("default configuration is not a mapping".into()));
    };

    let mut added = Vec::new();
    for (key, value) in default_map {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    Ok((added, serde_yaml::to_string(&doc)?))
}

/// Check the file at `path` and rewrite it when keys were missing.
/// Returns the keys that were added.
pub fn check_and_complete(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        info(format!(
            "No configuration file at {}: run `rlessongap init` first.",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (added, completed) = complete_yaml(&content)?;

    if added.is_empty() {
        success("Configuration file is complete.");
        return Ok(added);
    }

    fs::write(path, completed).map_err(|_| AppError::ConfigSave)?;
    success(format!(
        "Added missing configuration fields: {}",
        added.join(", ")
    ));

    Ok(added)
}
