//! YAML schema for the visualization configuration
//!
//! Every field has a default matching the usual `results/` layout, so an
//! empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::eval::ranking::DEFAULT_TOP_K;

/// Paths and options shared by all pipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    /// Evaluation log read by the `log` pipeline
    pub log_file: PathBuf,

    /// Root of the results tree (`<class_dir>/metrics`, ...)
    pub input_root: PathBuf,

    /// Metrics charts and heatmaps
    pub output_root: PathBuf,

    /// Precision-recall charts
    pub pr_output_root: PathBuf,

    /// Comparison bar charts
    pub comparison_dir: PathBuf,

    /// Confusion matrices built from the evaluation log
    pub log_output_dir: PathBuf,

    /// Class-count directories read by `heatmaps` and `compare`
    pub class_dirs: Vec<String>,

    /// Number of best and worst classes drawn per PR chart
    pub top_k: usize,

    /// Rendering options
    pub chart: ChartStyle,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("in.txt"),
            input_root: PathBuf::from("results"),
            output_root: PathBuf::from("results/Visualisations"),
            pr_output_root: PathBuf::from("results/Visualisations_PR"),
            comparison_dir: PathBuf::from("results/comparisons_visualizations"),
            log_output_dir: PathBuf::from("results/confusion_matrices"),
            class_dirs: vec!["10_classes".to_string(), "18_classes".to_string()],
            top_k: DEFAULT_TOP_K,
            chart: ChartStyle::default(),
        }
    }
}

impl VizConfig {
    /// Re-root every input and output path under `root`.
    ///
    /// Outputs keep their position relative to the default `results` tree.
    pub fn with_input_root(mut self, root: PathBuf) -> Self {
        let rebase = |path: &PathBuf| match path.strip_prefix("results") {
            Ok(rest) => root.join(rest),
            Err(_) => path.clone(),
        };
        self.output_root = rebase(&self.output_root);
        self.pr_output_root = rebase(&self.pr_output_root);
        self.comparison_dir = rebase(&self.comparison_dir);
        self.log_output_dir = rebase(&self.log_output_dir);
        self.input_root = root;
        self
    }
}

/// Chart rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Pixels per inch of figure size
    pub dpi: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { dpi: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_results_layout() {
        let config = VizConfig::default();
        assert_eq!(config.input_root, PathBuf::from("results"));
        assert_eq!(config.pr_output_root, PathBuf::from("results/Visualisations_PR"));
        assert_eq!(config.class_dirs, vec!["10_classes", "18_classes"]);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.chart.dpi, 100);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config: VizConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, VizConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "top_k: 5\nchart:\n  dpi: 150\nclass_dirs: [\"4_classes\"]\n";
        let config: VizConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.chart.dpi, 150);
        assert_eq!(config.class_dirs, vec!["4_classes"]);
        assert_eq!(config.output_root, PathBuf::from("results/Visualisations"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_yaml::from_str::<VizConfig>("topk: 5\n").is_err());
    }

    #[test]
    fn test_with_input_root_rebases_outputs() {
        let config = VizConfig::default().with_input_root(PathBuf::from("/data/run1"));
        assert_eq!(config.input_root, PathBuf::from("/data/run1"));
        assert_eq!(config.output_root, PathBuf::from("/data/run1/Visualisations"));
        assert_eq!(config.log_output_dir, PathBuf::from("/data/run1/confusion_matrices"));
        assert_eq!(config.log_file, PathBuf::from("in.txt"));
    }

    #[test]
    fn test_with_input_root_keeps_custom_outputs() {
        let config = VizConfig { output_root: PathBuf::from("/tmp/out"), ..Default::default() }
            .with_input_root(PathBuf::from("data"));
        assert_eq!(config.output_root, PathBuf::from("/tmp/out"));
    }
}
