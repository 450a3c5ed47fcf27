//! Loading schedule files from disk

use crate::config::schema::ScheduleSpec;
use crate::config::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load, parse and validate a YAML schedule file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ScheduleSpec> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    let spec = parse_config(path, &yaml_content)?;
    validate_config(&spec)?;

    Ok(spec)
}

/// Parse YAML text into a schedule spec without validating it
pub fn parse_config(path: &Path, yaml: &str) -> Result<ScheduleSpec> {
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParsing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
