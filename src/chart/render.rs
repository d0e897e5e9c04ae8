use crate::Result;
use crate::stats::Summary;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::panic;

const LOG_TARGET: &str = "chart";

const TITLE: &str = "Task Processing Time Analysis";
const X_DESC: &str = "Task Number";
const Y_DESC: &str = "Processing Time (minutes)";

/// Half-width of each bar in X-axis units; bars are centered on integer
/// positions, so 0.4 leaves a 0.2 gap between neighbors
const BAR_HALF_WIDTH: f64 = 0.4;

/// Render the duration series as a bar chart PNG
///
/// Bars appear in input order. The average and median lines span the full
/// chart width. The legend carries both line values and a text-only note
/// describing the trim policy.
///
/// # Errors
///
/// Returns an error if the backend cannot write to `path` or any drawing
/// primitive fails
pub fn render(durations: &[f64], summary: &Summary, path: &Utf8Path, width: u32, height: u32) -> Result<()> {
    let root = BitMapBackend::new(path.as_std_path(), (width, height)).into_drawing_area();

    // The bitmap backend panics rather than erroring on some font issues,
    // so the drawing pass runs under a panic guard.
    let Ok(outcome) = panic::catch_unwind(panic::AssertUnwindSafe(|| draw(&root, durations, summary))) else {
        return Err(app_err!("chart rendering backend panicked while writing '{path}'"));
    };

    outcome.into_app_err_with(|| format!("rendering chart to '{path}'"))?;

    log::debug!(target: LOG_TARGET, "Wrote {width}x{height} chart to '{path}'");
    Ok(())
}

#[expect(clippy::cast_precision_loss, reason = "Bar indices are far below 2^52")]
fn draw<DB>(root: &DrawingArea<DB, Shift>, durations: &[f64], summary: &Summary) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (y_min, y_max) = y_range(durations);
    let x_max = durations.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 48))
        .margin(30)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(-0.5..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(("sans-serif", 36))
        .label_style(("sans-serif", 28))
        .x_label_formatter(&|v| x_tick_label(*v))
        .draw()?;

    _ = chart.draw_series(durations.iter().enumerate().map(|(index, &minutes)| {
        let x = index as f64;
        Rectangle::new([(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, minutes)], BLUE.filled())
    }))?;

    _ = chart
        .draw_series(DashedLineSeries::new(
            [(-0.5, summary.average), (x_max, summary.average)],
            18,
            12,
            RED.stroke_width(5),
        ))?
        .label(format!("Average: {:.1} min", summary.average))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], RED.stroke_width(5)));

    _ = chart
        .draw_series(DashedLineSeries::new(
            [(-0.5, summary.median), (x_max, summary.median)],
            18,
            12,
            GREEN.stroke_width(5),
        ))?
        .label(format!("Median: {:.1} min", summary.median))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], GREEN.stroke_width(5)));

    // Text-only legend entry explaining the trim policy; it has no series
    // and draws no glyph.
    _ = chart
        .draw_series(core::iter::empty::<Rectangle<(f64, f64)>>())?
        .label(format!(
            "Excluding {} highest and {} lowest values",
            summary.trim_count, summary.trim_count
        ))
        .legend(|(x, y)| EmptyElement::at((x, y)));

    let value_style = ("sans-serif", 24)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    _ = chart.draw_series(
        durations
            .iter()
            .enumerate()
            .filter(|&(_, &minutes)| minutes > 0.0)
            .map(|(index, &minutes)| Text::new(format!("{minutes:.1}"), (index as f64, minutes), value_style.clone())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", 30))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Bars sit on integer positions, so only integral ticks get a label;
/// labeling fractional ticks would round neighbors to the same number on
/// small series
fn x_tick_label(position: f64) -> String {
    if (position - position.round()).abs() < 1e-6 {
        format!("{position:.0}")
    } else {
        String::new()
    }
}

/// Y range covering every bar plus the zero baseline, with headroom for the
/// value labels above positive bars
fn y_range(durations: &[f64]) -> (f64, f64) {
    let low = durations.iter().copied().fold(0.0_f64, f64::min);
    let high = durations.iter().copied().fold(0.0_f64, f64::max);

    let span = (high - low).max(1.0);
    let y_min = if low < 0.0 { low - span * 0.05 } else { 0.0 };
    let y_max = high + span * 0.1;

    (y_min, y_max)
}
