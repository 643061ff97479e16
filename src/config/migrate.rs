use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Names of the fields a config file must carry.
fn expected_fields() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(_) => Err(AppError::Config("default config is not a mapping".into())),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {e}", path.display()))),
    }
}

/// Fields present in the defaults but absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let expected = expected_fields()?;

    Ok(expected
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field with its default value, keeping existing values
/// and any unknown keys untouched.
///   Ok(true)  → file updated
///   Ok(false) → nothing to do
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let expected = expected_fields()?;

    let mut changed = false;
    for (k, v) in expected {
        if !current.contains_key(&k) {
            info(format!(
                "Adding missing config field '{}'",
                k.as_str().unwrap_or("?")
            ));
            current.insert(k, v);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        success(format!("Configuration migrated: {}", path.display()));
    }

    Ok(changed)
}
