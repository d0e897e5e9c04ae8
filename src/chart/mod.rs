//! Bar chart rendering
//!
//! Draws one bar per task in input order, overlays full-width dashed
//! reference lines at the trimmed average (red) and median (green), labels
//! every positive bar with its value, and attaches a legend that also
//! carries a text-only note describing the trim policy. The result is
//! written as a PNG, overwriting any existing file at the output path.

mod render;

pub use render::render;
