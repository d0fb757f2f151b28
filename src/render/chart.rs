//! Chart descriptions handed to a [`ChartSink`](super::ChartSink)
//!
//! These carry the prepared data and labels only; styling and encoding
//! belong to the sink.

/// Figure size in inches, scaled by the renderer's dpi
pub type FigSize = (u32, u32);

/// Point marker drawn on a line series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Triangle,
    Cross,
}

/// Named values, one per category
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub marker: MarkerShape,
}

/// Line chart over categorical x values
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub y_range: (f64, f64),
    pub figsize: FigSize,
}

/// Annotated count matrix
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// counts[row][column]
    pub counts: Vec<Vec<u64>>,
    pub figsize: FigSize,
}

impl Heatmap {
    pub fn max_count(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// One labelled curve of `(x, y)` points
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Several curves on shared unit axes
#[derive(Clone, Debug, PartialEq)]
pub struct CurveChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<Curve>,
    pub figsize: FigSize,
}

/// One bar of a grouped bar chart
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Index into [`BarChart::groups`]
    pub group: usize,
    /// Index into [`BarChart::hues`]
    pub hue: usize,
    pub value: f64,
    /// Half-height of the error bar, if any
    pub error: Option<f64>,
}

/// Bars grouped along x, coloured by hue
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<String>,
    pub hues: Vec<String>,
    pub bars: Vec<Bar>,
    pub figsize: FigSize,
}

impl BarChart {
    /// Largest bar top including its error bar
    pub fn max_extent(&self) -> f64 {
        self.bars.iter().map(|b| b.value + b.error.unwrap_or(0.0)).fold(0.0, f64::max)
    }
}

/// Any chart the pipelines produce
#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Line(LineChart),
    Heatmap(Heatmap),
    Curves(CurveChart),
    Bars(BarChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(c) => &c.title,
            Chart::Heatmap(c) => &c.title,
            Chart::Curves(c) => &c.title,
            Chart::Bars(c) => &c.title,
        }
    }

    pub fn figsize(&self) -> FigSize {
        match self {
            Chart::Line(c) => c.figsize,
            Chart::Heatmap(c) => c.figsize,
            Chart::Curves(c) => c.figsize,
            Chart::Bars(c) => c.figsize,
        }
    }
}
