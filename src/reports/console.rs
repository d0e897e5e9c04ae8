use crate::Result;
use crate::misc::ColorMode;
use crate::stats::Summary;
use camino::Utf8Path;
use core::fmt::{self, Display, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};

/// Write the fixed-format success summary
///
/// The textual content is identical regardless of color mode; coloring only
/// wraps the statistic values in ANSI sequences when enabled.
pub fn generate<W: Write>(summary: &Summary, output_path: &Utf8Path, color: ColorMode, writer: &mut W) -> Result<()> {
    let colors = ColorScheme::new(color);

    writeln!(writer, "Chart generated successfully as '{output_path}'")?;
    writeln!(writer, "Statistics:")?;

    write!(writer, "- Average processing time (excluding extremes): ")?;
    colors.write_value(writer, format_args!("{:.1}", summary.average))?;
    writeln!(writer, " minutes")?;

    write!(writer, "- Median processing time (excluding extremes): ")?;
    colors.write_value(writer, format_args!("{:.1}", summary.median))?;
    writeln!(writer, " minutes")?;

    write!(writer, "- Number of tasks analyzed: ")?;
    colors.write_value(writer, format_args!("{}", summary.total_count))?;
    writeln!(writer)?;

    write!(writer, "- Number of tasks used for average: ")?;
    colors.write_value(writer, format_args!("{}", summary.trimmed_count))?;
    writeln!(writer)?;

    Ok(())
}

/// Write the single-line failure report used at the pipeline boundary
///
/// Every internal failure — I/O, parsing, statistics, rendering — collapses
/// into this one externally visible form.
pub fn generate_failure<W: Write>(error: &impl Display, writer: &mut W) -> Result<()> {
    writeln!(writer, "Error generating chart: {error}")?;
    Ok(())
}

struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn new(color_mode: ColorMode) -> Self {
        let enabled = matches!(color_mode, ColorMode::Always) || (matches!(color_mode, ColorMode::Auto) && stdout().is_terminal());
        Self { enabled }
    }

    fn write_value<W: Write>(&self, writer: &mut W, value: fmt::Arguments<'_>) -> fmt::Result {
        if self.enabled {
            write!(writer, "{}", value.bold())
        } else {
            write!(writer, "{value}")
        }
    }
}
