//! Chart rendering
//!
//! Pipelines build [`Chart`] values and hand them to a [`ChartSink`].
//! [`PngRenderer`] writes PNG files; [`MemorySink`] keeps charts in memory.

mod chart;
mod png;

pub use chart::{
    Bar, BarChart, Chart, Curve, CurveChart, FigSize, Heatmap, LineChart, MarkerShape, Series,
};
pub use png::PngRenderer;

use std::path::{Path, PathBuf};

use crate::Result;

/// Destination for rendered charts
pub trait ChartSink {
    /// Render `chart` to `path`
    fn render(&mut self, chart: &Chart, path: &Path) -> Result<()>;
}

/// Sink that records every chart with its target path
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub charts: Vec<(PathBuf, Chart)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart recorded for `path`, if any
    pub fn get(&self, path: &Path) -> Option<&Chart> {
        self.charts.iter().find(|(p, _)| p == path).map(|(_, c)| c)
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.charts.iter().map(|(p, _)| p.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl ChartSink for MemorySink {
    fn render(&mut self, chart: &Chart, path: &Path) -> Result<()> {
        self.charts.push((path.to_path_buf(), chart.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Chart {
        Chart::Curves(CurveChart {
            title: "PR".into(),
            x_label: "Recall".into(),
            y_label: "Precision".into(),
            curves: vec![Curve { label: "Class 1".into(), points: vec![(1.0, 0.5), (0.0, 1.0)] }],
            figsize: (12, 8),
        })
    }

    #[test]
    fn test_memory_sink_records() {
        let mut sink = MemorySink::new();
        sink.render(&sample(), Path::new("out/a.png")).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.paths(), vec![Path::new("out/a.png")]);
        assert_eq!(sink.get(Path::new("out/a.png")).map(Chart::title), Some("PR"));
        assert!(sink.get(Path::new("out/b.png")).is_none());
    }

    #[test]
    fn test_png_renderer_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("pr.png");
        let mut renderer = PngRenderer::new(crate::config::ChartStyle { dpi: 20 });

        renderer.render(&sample(), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_png_renderer_writes_heatmap() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut renderer = PngRenderer::new(crate::config::ChartStyle { dpi: 40 });
        let heatmap = |labels: Vec<String>, counts: Vec<Vec<u64>>| {
            Chart::Heatmap(Heatmap {
                title: "Confusion Matrix - GFD".into(),
                x_label: "True Label".into(),
                y_label: "Predicted Label".into(),
                row_labels: labels.clone(),
                column_labels: labels,
                counts,
                figsize: (10, 8),
            })
        };

        let square = dir.path().join("square.png");
        let labels = vec!["cat".to_string(), "dog".to_string()];
        renderer.render(&heatmap(labels, vec![vec![8, 2], vec![1, 9]]), &square).unwrap();
        assert!(square.is_file());

        let single = dir.path().join("single.png");
        renderer.render(&heatmap(vec!["7".to_string()], vec![vec![3]]), &single).unwrap();
        assert!(single.is_file());
    }
}
