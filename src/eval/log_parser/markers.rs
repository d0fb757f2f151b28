//! Marker table for evaluation reports
//!
//! Each entry maps a substring found in a report line to the parser
//! transition it triggers. Entries are tried in order and the first match
//! wins, so the table order is the transition priority.

use std::fmt;
use std::str::FromStr;

/// Classification or clustering method a representation was evaluated with
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// k-nearest-neighbour classification
    Knn,
    /// k-means clustering
    KMeans,
}

impl Algorithm {
    /// Every algorithm slot created for a newly seen representation
    pub const ALL: [Algorithm; 2] = [Algorithm::Knn, Algorithm::KMeans];

    /// Name used in output file names and chart titles
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Knn => "KNN",
            Algorithm::KMeans => "KMeans",
        }
    }

    /// Infer the algorithm from an artifact file name.
    ///
    /// Anything that does not mention `KMeans` is a KNN result.
    pub fn from_file_name(name: &str) -> Self {
        if name.contains("KMeans") {
            Algorithm::KMeans
        } else {
            Algorithm::Knn
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "knn" => Ok(Algorithm::Knn),
            "kmeans" | "k-means" => Ok(Algorithm::KMeans),
            _ => Err(format!("Unknown algorithm: {s}. Valid: KNN, KMeans")),
        }
    }
}

/// State change requested by a report line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Section header naming a representation
    Representation,
    /// Switch of the active algorithm
    Algorithm(Algorithm),
    /// Prediction line carrying a label and a confidence
    Prediction,
}

/// One row of the marker table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Substring that identifies the line
    pub pattern: &'static str,
    /// Transition triggered by the line
    pub transition: Transition,
}

impl Marker {
    pub const fn new(pattern: &'static str, transition: Transition) -> Self {
        Self { pattern, transition }
    }
}

/// Markers emitted by the shape-descriptor evaluation binary
pub const REPORT_MARKERS: &[Marker] = &[
    Marker::new("Évaluation pour la représentation", Transition::Representation),
    Marker::new("Classification avec KNN", Transition::Algorithm(Algorithm::Knn)),
    Marker::new("Clustering avec K-Means", Transition::Algorithm(Algorithm::KMeans)),
    Marker::new("Prédiction finale", Transition::Prediction),
];

/// First transition in `markers` whose pattern occurs in `line`
pub fn match_marker(markers: &[Marker], line: &str) -> Option<Transition> {
    markers.iter().find(|m| line.contains(m.pattern)).map(|m| m.transition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_representation() {
        let t = match_marker(REPORT_MARKERS, "Évaluation pour la représentation : ART");
        assert_eq!(t, Some(Transition::Representation));
    }

    #[test]
    fn test_algorithm_markers() {
        assert_eq!(
            match_marker(REPORT_MARKERS, "=== Classification avec KNN ==="),
            Some(Transition::Algorithm(Algorithm::Knn))
        );
        assert_eq!(
            match_marker(REPORT_MARKERS, "=== Clustering avec K-Means sur les images GFD ==="),
            Some(Transition::Algorithm(Algorithm::KMeans))
        );
    }

    #[test]
    fn test_first_match_wins() {
        // A header that also mentions a prediction is still a header.
        let line = "Évaluation pour la représentation : Prédiction finale";
        assert_eq!(match_marker(REPORT_MARKERS, line), Some(Transition::Representation));
    }

    #[test]
    fn test_unmarked_line() {
        assert_eq!(match_marker(REPORT_MARKERS, "Le k optimal est : 3"), None);
    }

    #[test]
    fn test_custom_table() {
        let markers = [Marker::new("## rep", Transition::Representation)];
        assert_eq!(match_marker(&markers, "## rep: X"), Some(Transition::Representation));
        assert_eq!(match_marker(&markers, "Classification avec KNN"), None);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Knn.to_string(), "KNN");
        assert_eq!(Algorithm::KMeans.to_string(), "KMeans");
        assert_eq!("knn".parse::<Algorithm>(), Ok(Algorithm::Knn));
        assert_eq!("K-Means".parse::<Algorithm>(), Ok(Algorithm::KMeans));
        assert!("svm".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_from_file_name() {
        assert_eq!(Algorithm::from_file_name("ART_KMeans_metrics.csv"), Algorithm::KMeans);
        assert_eq!(Algorithm::from_file_name("ART_metrics.csv"), Algorithm::Knn);
    }
}
