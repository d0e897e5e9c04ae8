//! The analysis pipeline: read the export, compute trimmed statistics,
//! render the chart, print the summary.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use tasktime::config::Config;
use tasktime::misc::ColorMode;
use tasktime::reports::{generate_console, generate_failure};
use tasktime::stats::Summary;
use tasktime::{Result, chart, ingest};

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input CSV export [default: from configuration]
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Path of the PNG chart to write [default: from configuration]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Path to configuration file [default: one of tasktime.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Run the full pipeline behind a single error boundary
///
/// Configuration problems surface as ordinary command errors; everything
/// downstream of configuration — reading, statistics, rendering — collapses
/// into one `Error generating chart:` line on stdout and a failure exit, so
/// no partial chart is ever reported as a success.
pub fn analyze(args: &AnalyzeArgs) -> Result<()> {
    init_logging(args.log_level);

    let (mut config, warnings) = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in &warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }

    if let Some(input) = &args.input {
        config.input_path.clone_from(input);
    }

    if let Some(output) = &args.output {
        config.output_path.clone_from(output);
    }

    match run_pipeline(&config) {
        Ok(summary) => {
            let mut console_output = String::new();
            generate_console(&summary, &config.output_path, args.color, &mut console_output)?;
            print!("{console_output}");
            Ok(())
        }
        Err(e) => {
            let mut console_output = String::new();
            generate_failure(&e, &mut console_output)?;
            print!("{console_output}");
            std::process::exit(1);
        }
    }
}

fn run_pipeline(config: &Config) -> Result<Summary> {
    let durations = ingest::read_durations(&config.input_path, &config.timestamp_format)?;
    let summary = Summary::compute(&durations, config.trim_count)?;
    chart::render(&durations, &summary, &config.output_path, config.chart_width, config.chart_height)?;
    Ok(summary)
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}
