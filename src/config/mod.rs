//! Configuration controlling where data is read from and how it is analyzed
//!
//! Configuration is loaded from `tasktime.[toml|yml|yaml|json]` in the
//! working directory, from an explicit `--config` path, or falls back to the
//! embedded defaults. All fields are optional and validation problems are
//! reported as non-fatal warnings.

#[expect(clippy::module_inception, reason = "Matches the module layout used across the codebase")]
mod config;

pub use config::{Config, DEFAULT_CONFIG_YAML};
