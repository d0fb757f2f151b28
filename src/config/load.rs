//! Loading the YAML configuration file

use std::fs;
use std::path::Path;

use super::schema::VizConfig;
use super::validate::validate_config;
use crate::{Error, Result};

/// Load and validate a configuration from a YAML file.
///
/// ```no_run
/// use evalviz::config::load_config;
///
/// let config = load_config("evalviz.yaml")?;
/// println!("top_k = {}", config.top_k);
/// # Ok::<(), evalviz::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<VizConfig> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::ConfigNotFound { path: path.to_path_buf() },
        _ => Error::io(format!("reading config {}", path.display()), e),
    })?;

    let config = parse_config(&yaml_content).map_err(|e| Error::ConfigParsing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Parse YAML text into a configuration without validating it.
///
/// An empty document yields the default configuration.
pub fn parse_config(yaml: &str) -> std::result::Result<VizConfig, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(VizConfig::default());
    }
    serde_yaml::from_str(yaml)
}
