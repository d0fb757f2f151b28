//! PNG rendering with plotters

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::Path;

use super::chart::{BarChart, Chart, CurveChart, FigSize, Heatmap, LineChart, MarkerShape};
use super::ChartSink;
use crate::config::ChartStyle;
use crate::{Error, Result};

const FONT: &str = "sans-serif";
const MARGIN: u32 = 20;
const LABEL_AREA: u32 = 60;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Writes charts as PNG files, creating parent directories as needed
#[derive(Clone, Debug, Default)]
pub struct PngRenderer {
    style: ChartStyle,
}

impl PngRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Pixel dimensions of a figure
    pub fn pixels(&self, figsize: FigSize) -> (u32, u32) {
        (figsize.0 * self.style.dpi, figsize.1 * self.style.dpi)
    }
}

impl ChartSink for PngRenderer {
    fn render(&mut self, chart: &Chart, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating {}", parent.display()), e))?;
        }

        let root = BitMapBackend::new(path, self.pixels(chart.figsize())).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::render(path, e))?;

        match chart {
            Chart::Line(c) => draw_line_chart(&root, c, path)?,
            Chart::Heatmap(c) => draw_heatmap(&root, c, path)?,
            Chart::Curves(c) => draw_curves(&root, c, path)?,
            Chart::Bars(c) => draw_bars(&root, c, path)?,
        }

        root.present().map_err(|e| Error::render(path, e))?;
        Ok(())
    }
}

fn draw_line_chart(root: &Area<'_>, chart: &LineChart, path: &Path) -> Result<()> {
    // Category i sits at x = 2i + 1.
    let slots = 2 * chart.categories.len().max(1) as i32;
    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(0..slots, chart.y_range.0..chart.y_range.1)
        .map_err(|e| Error::render(path, e))?;

    let categories = &chart.categories;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize + 1)
        .x_label_formatter(&|x| cell_label(categories, *x, false))
        .x_desc(&chart.x_label)
        .y_desc(&chart.y_label)
        .draw()
        .map_err(|e| Error::render(path, e))?;

    for (idx, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(i32, f64)> =
            series.values.iter().enumerate().map(|(i, &v)| (2 * i as i32 + 1, v)).collect();

        ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(|e| Error::render(path, e))?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        match series.marker {
            MarkerShape::Circle => {
                ctx.draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                    .map_err(|e| Error::render(path, e))?;
            }
            MarkerShape::Triangle => {
                ctx.draw_series(points.iter().map(|&p| TriangleMarker::new(p, 5, color.filled())))
                    .map_err(|e| Error::render(path, e))?;
            }
            MarkerShape::Cross => {
                ctx.draw_series(points.iter().map(|&p| Cross::new(p, 4, color.stroke_width(2))))
                    .map_err(|e| Error::render(path, e))?;
            }
        }
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| Error::render(path, e))?;
    Ok(())
}

/// White to dark blue, `t` in [0, 1]
fn blues(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(lerp(247.0, 8.0), lerp(251.0, 48.0), lerp(255.0, 107.0))
}

/// Label of the cell centred at `pos` on a doubled axis, `None` between cells
fn cell_label(labels: &[String], pos: i32, flip: bool) -> String {
    if pos < 0 || pos % 2 == 0 {
        return String::new();
    }
    let idx = ((pos - 1) / 2) as usize;
    let idx = if flip { labels.len().checked_sub(idx + 1) } else { Some(idx) };
    idx.and_then(|i| labels.get(i)).cloned().unwrap_or_default()
}

fn draw_heatmap(root: &Area<'_>, chart: &Heatmap, path: &Path) -> Result<()> {
    // Cells are 2 units wide so their centres sit on odd integers; row 0 is drawn at the top.
    let cols = chart.column_labels.len().max(1) as i32;
    let rows = chart.row_labels.len().max(1) as i32;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(0..2 * cols, 0..2 * rows)
        .map_err(|e| Error::render(path, e))?;

    let (row_labels, column_labels) = (&chart.row_labels, &chart.column_labels);
    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(2 * cols as usize + 1)
        .y_labels(2 * rows as usize + 1)
        .x_label_formatter(&|x| cell_label(column_labels, *x, false))
        .y_label_formatter(&|y| cell_label(row_labels, *y, true))
        .x_desc(&chart.x_label)
        .y_desc(&chart.y_label)
        .draw()
        .map_err(|e| Error::render(path, e))?;

    let max = chart.max_count().max(1) as f64;
    let cells = || {
        chart.counts.iter().enumerate().flat_map(move |(r, row)| {
            let y = 2 * (rows - 1 - r as i32);
            row.iter().enumerate().map(move |(c, &v)| (2 * c as i32, y, v))
        })
    };

    ctx.draw_series(cells().map(|(x, y, v)| {
        Rectangle::new([(x, y), (x + 2, y + 2)], blues(v as f64 / max).filled())
    }))
    .map_err(|e| Error::render(path, e))?;

    ctx.draw_series(cells().map(|(x, y, v)| {
        let ink: &'static RGBColor = if v as f64 / max > 0.5 { &WHITE } else { &BLACK };
        let style = TextStyle::from((FONT, 16).into_font())
            .color(ink)
            .pos(Pos::new(HPos::Center, VPos::Center));
        EmptyElement::at((x + 1, y + 1)) + Text::new(v.to_string(), (0, 0), style)
    }))
    .map_err(|e| Error::render(path, e))?;

    Ok(())
}

fn draw_curves(root: &Area<'_>, chart: &CurveChart, path: &Path) -> Result<()> {
    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(0f64..1f64, 0f64..1.05f64)
        .map_err(|e| Error::render(path, e))?;

    ctx.configure_mesh()
        .x_desc(&chart.x_label)
        .y_desc(&chart.y_label)
        .draw()
        .map_err(|e| Error::render(path, e))?;

    for (idx, curve) in chart.curves.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        ctx.draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(2)))
            .map_err(|e| Error::render(path, e))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| Error::render(path, e))?;
    Ok(())
}

fn draw_bars(root: &Area<'_>, chart: &BarChart, path: &Path) -> Result<()> {
    // Each bar is 2 units wide so bar and group centres land on integers.
    let hues = chart.hues.len().max(1) as i32;
    let stride = 2 * (hues + 1);
    let slots = stride * chart.groups.len().max(1) as i32;
    let top = (chart.max_extent() * 1.1).max(1.0);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(0..slots, 0f64..top)
        .map_err(|e| Error::render(path, e))?;

    let groups = &chart.groups;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize + 1)
        .x_label_formatter(&|x| {
            let offset = *x - hues;
            if offset >= 0 && offset % stride == 0 {
                groups.get((offset / stride) as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .x_desc(&chart.x_label)
        .y_desc(&chart.y_label)
        .draw()
        .map_err(|e| Error::render(path, e))?;

    let left = |group: usize, hue: usize| group as i32 * stride + 2 * hue as i32;

    for (h, name) in chart.hues.iter().enumerate() {
        let color = Palette99::pick(h).to_rgba();
        ctx.draw_series(chart.bars.iter().filter(|b| b.hue == h).map(|b| {
            let x0 = left(b.group, b.hue);
            Rectangle::new([(x0, 0.0), (x0 + 2, b.value)], color.filled())
        }))
        .map_err(|e| Error::render(path, e))?
        .label(name.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    ctx.draw_series(chart.bars.iter().filter_map(|b| {
        b.error.map(|e| {
            let x = left(b.group, b.hue) + 1;
            ErrorBar::new_vertical(x, b.value - e, b.value, b.value + e, BLACK.stroke_width(2), 10)
        })
    }))
    .map_err(|e| Error::render(path, e))?;

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| Error::render(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_labels() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(cell_label(&labels, 1, false), "a");
        assert_eq!(cell_label(&labels, 5, false), "c");
        assert_eq!(cell_label(&labels, 4, false), "");
        assert_eq!(cell_label(&labels, 1, true), "c");
        assert_eq!(cell_label(&labels, 5, true), "a");
        assert_eq!(cell_label(&labels, 7, true), "");
    }

    #[test]
    fn test_blues_endpoints() {
        assert_eq!(blues(0.0), RGBColor(247, 251, 255));
        assert_eq!(blues(1.0), RGBColor(8, 48, 107));
        assert_eq!(blues(3.0), blues(1.0));
    }

    #[test]
    fn test_pixels_scale_with_dpi() {
        let renderer = PngRenderer::new(ChartStyle { dpi: 50 });
        assert_eq!(renderer.pixels((12, 8)), (600, 400));
    }
}
