//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::VizConfig;

pub(crate) const MAX_DPI: u32 = 600;

/// Class count encoded in a class directory name (`18_classes` -> 18)
pub fn class_count(class_dir: &str) -> Option<u32> {
    class_dir.split('_').next()?.parse().ok()
}

/// Validate a visualization configuration
///
/// Checks:
/// - `top_k` is positive
/// - class directories are present and carry a class count
/// - the chart dpi is in range
pub fn validate_config(config: &VizConfig) -> Result<(), ValidationError> {
    if config.top_k == 0 {
        return Err(ValidationError::InvalidTopK(config.top_k));
    }

    if config.class_dirs.is_empty() {
        return Err(ValidationError::EmptyClassDirs);
    }

    if let Some(dir) = config.class_dirs.iter().find(|d| class_count(d).is_none()) {
        return Err(ValidationError::InvalidClassDir(dir.clone()));
    }

    if config.chart.dpi == 0 || config.chart.dpi > MAX_DPI {
        return Err(ValidationError::InvalidDpi(config.chart.dpi));
    }

    Ok(())
}
