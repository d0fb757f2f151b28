//! Artifact file naming

/// Kind of CSV artifact and the chart rendered from it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Metrics,
    ConfusionMatrix,
    PrecisionRecall,
}

impl ArtifactKind {
    /// Subdirectory holding this kind, both in the inputs and the outputs
    pub fn dir_name(self) -> &'static str {
        match self {
            ArtifactKind::Metrics => "metrics",
            ArtifactKind::ConfusionMatrix => "confusion_matrices",
            ArtifactKind::PrecisionRecall => "precision_recall_data",
        }
    }

    pub fn input_suffix(self) -> &'static str {
        match self {
            ArtifactKind::Metrics => "_metrics.csv",
            ArtifactKind::ConfusionMatrix => "_confusion_matrix.csv",
            ArtifactKind::PrecisionRecall => "_pr_data.csv",
        }
    }

    pub fn output_suffix(self) -> &'static str {
        match self {
            ArtifactKind::Metrics => "_metrics.png",
            ArtifactKind::ConfusionMatrix => "_confusion_matrix.png",
            ArtifactKind::PrecisionRecall => "_pr_curve_grouped.png",
        }
    }

    /// Base name of an input file: the file name without its suffix
    pub fn base_name(self, file_name: &str) -> Option<&str> {
        file_name.strip_suffix(self.input_suffix())
    }

    /// Chart file name for an input file name
    pub fn output_name(self, file_name: &str) -> Option<String> {
        self.base_name(file_name).map(|base| format!("{base}{}", self.output_suffix()))
    }
}

/// Make a representation or algorithm name safe for use in a file name.
///
/// Strips `===` banners, trims, maps `/`, `=`, spaces and `:` to `_`,
/// drops `?`, and collapses consecutive underscores.
///
/// Names with surrounding whitespace or repeated separators therefore map
/// to shorter names than the Python plotting scripts produced: `"ART "`
/// becomes `ART` here where the scripts wrote `ART_`.
///
/// ```
/// use evalviz::io::sanitize_filename;
///
/// assert_eq!(sanitize_filename("A/B = C: D?"), "A_B_C_D");
/// assert_eq!(sanitize_filename("=== ART ==="), "ART");
/// assert_eq!(sanitize_filename("ART "), "ART");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let stripped = name.replace("===", "");
    let mut out = String::with_capacity(stripped.len());
    for ch in stripped.trim().chars() {
        let mapped = match ch {
            '/' | '=' | ' ' | ':' => '_',
            '?' => continue,
            c => c,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_reference_case() {
        assert_eq!(sanitize_filename("A/B = C: D?"), "A_B_C_D");
    }

    #[test]
    fn test_sanitize_strips_banner() {
        assert_eq!(sanitize_filename("=== Classification avec KNN ==="), "Classification_avec_KNN");
    }

    #[test]
    fn test_sanitize_leaves_clean_names() {
        assert_eq!(sanitize_filename("GFD"), "GFD");
        assert_eq!(sanitize_filename("E34_KMeans"), "E34_KMeans");
        assert_eq!(sanitize_filename("Évaluation"), "Évaluation");
    }

    #[test]
    fn test_sanitize_question_mark_removed_not_replaced() {
        assert_eq!(sanitize_filename("why?not"), "whynot");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_filename("  ===  "), "");
    }

    #[test]
    fn test_output_names() {
        assert_eq!(
            ArtifactKind::Metrics.output_name("ART_metrics.csv").as_deref(),
            Some("ART_metrics.png")
        );
        assert_eq!(
            ArtifactKind::ConfusionMatrix.output_name("GFD_confusion_matrix.csv").as_deref(),
            Some("GFD_confusion_matrix.png")
        );
        assert_eq!(
            ArtifactKind::PrecisionRecall.output_name("Yang_pr_data.csv").as_deref(),
            Some("Yang_pr_curve_grouped.png")
        );
        assert_eq!(ArtifactKind::Metrics.output_name("notes.txt"), None);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(ArtifactKind::PrecisionRecall.base_name("E34_pr_data.csv"), Some("E34"));
    }
}
