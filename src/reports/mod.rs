//! Report generation for analysis results
//!
//! One console generator producing the fixed-format success summary, plus
//! the single-line failure report used at the pipeline boundary. Both write
//! into any `core::fmt::Write`, so commands render to a string and print
//! while tests assert on the exact output.

mod console;

pub use console::{generate as generate_console, generate_failure};
