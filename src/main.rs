//! A tool to analyze task processing times from CSV exports.
//!
//! # Overview
//!
//! `tasktime` reads a CSV export of tasks, computes how long each task took
//! to process (the difference between its `created_at` and `updated_at`
//! timestamps, in minutes), derives outlier-resistant summary statistics,
//! and renders a bar chart of every task with average and median overlay
//! lines.
//!
//! The average and median are *trimmed*: the 2 highest and 2 lowest
//! durations are discarded before computing them, so a handful of stuck or
//! instantly-closed tasks cannot skew the headline numbers. The chart still
//! shows every task.
//!
//! # Quick Start
//!
//! Analyze the default export in the current directory:
//!
//! ```bash
//! tasktime analyze
//! ```
//!
//! This reads `training_task_202503061143.csv`, writes
//! `task_processing_time.png`, and prints a summary:
//!
//! ```text
//! Chart generated successfully as 'task_processing_time.png'
//! Statistics:
//! - Average processing time (excluding extremes): 5.5 minutes
//! - Median processing time (excluding extremes): 5.5 minutes
//! - Number of tasks analyzed: 10
//! - Number of tasks used for average: 6
//! ```
//!
//! On any failure — missing file, malformed row, unparsable timestamp, too
//! few records to trim, rendering problem — a single line is printed
//! instead and the process exits non-zero:
//!
//! ```text
//! Error generating chart: unable to open task export 'training_task_202503061143.csv'
//! ```
//!
//! # Basic Usage
//!
//! **Explicit input and output paths:**
//! ```bash
//! tasktime analyze --input tasks.csv --output tasks.png
//! ```
//!
//! **Diagnostic logging** (negative-duration warnings, timings):
//! ```bash
//! tasktime analyze --log-level debug
//! ```
//!
//! # Configuration
//!
//! Paths, the timestamp format, the trim count, and the chart dimensions
//! can be set in a configuration file found as `tasktime.[toml|yml|yaml|json]`
//! in the working directory or passed with `--config`:
//!
//! ```yaml
//! input_path: exports/tasks.csv
//! output_path: reports/tasks.png
//! trim_count: 2
//! ```
//!
//! **Generate a commented default config:**
//! ```bash
//! tasktime init
//! ```
//!
//! **Validate a config file:**
//! ```bash
//! tasktime validate --config tasktime.yml
//! ```
//!
//! # Input Format
//!
//! The input must be a CSV file with a header row containing `created_at`
//! and `updated_at` columns formatted as `YYYY-MM-DD HH:MM:SS.ffffff`.
//! Other columns are ignored. Rows where `updated_at` precedes `created_at`
//! produce negative durations; they stay in the series but are logged as
//! data-quality warnings.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use tasktime::Result;

mod commands;

use crate::commands::{AnalyzeArgs, InitArgs, ValidateArgs, analyze, init_config, validate_config};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "tasktime", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a task export and render the processing time chart
    Analyze(AnalyzeArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    match &Cli::parse().command {
        Command::Analyze(analyze_args) => analyze(analyze_args),
        Command::Init(init_args) => init_config(init_args),
        Command::Validate(validate_args) => validate_config(validate_args),
    }
}
