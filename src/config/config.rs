use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// Minimum chart dimension (in pixels) below which rendering is unlikely to be legible
const MIN_CHART_DIMENSION: u32 = 320;

fn default_input_path() -> Utf8PathBuf {
    Utf8PathBuf::from("training_task_202503061143.csv")
}

fn default_output_path() -> Utf8PathBuf {
    Utf8PathBuf::from("task_processing_time.png")
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S%.f".to_string()
}

const fn default_trim_count() -> usize {
    2
}

/// 12 inches at 300 DPI
const fn default_chart_width() -> u32 {
    3600
}

/// 6 inches at 300 DPI
const fn default_chart_height() -> u32 {
    1800
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the CSV export containing `created_at` and `updated_at` columns
    #[serde(default = "default_input_path")]
    pub input_path: Utf8PathBuf,

    /// Path of the PNG chart to write
    #[serde(default = "default_output_path")]
    pub output_path: Utf8PathBuf,

    /// chrono strftime format of the timestamp columns
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Number of extreme values dropped from each end of the sorted series
    #[serde(default = "default_trim_count")]
    pub trim_count: usize,

    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading tasktime configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_dir.join("tasktime.toml"),
                base_dir.join("tasktime.yml"),
                base_dir.join("tasktime.yaml"),
                base_dir.join("tasktime.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading tasktime configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration to a file, preserving comments for YAML format
    ///
    /// When saving to YAML format, this method writes the raw content from
    /// `default_config.yml` so the explanatory comments survive. For other
    /// formats it serializes the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();

        if matches!(extension, "yml" | "yaml") {
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        } else {
            self.save(output_path)?;
        }

        Ok(())
    }

    /// Validate the configuration to detect non-sensical settings
    fn validate(&self, warnings: &mut Vec<String>) {
        if self.trim_count == 0 {
            warnings.push("trim_count is 0: no outlier trimming will be applied".to_string());
        }

        if self.timestamp_format.is_empty() {
            warnings.push("timestamp_format is empty: no timestamp will parse".to_string());
        }

        if self.chart_width < MIN_CHART_DIMENSION || self.chart_height < MIN_CHART_DIMENSION {
            warnings.push(format!(
                "chart dimensions {}x{} are below {MIN_CHART_DIMENSION}px: labels may be unreadable",
                self.chart_width, self.chart_height
            ));
        }

        if self.input_path == self.output_path {
            warnings.push(format!("input_path and output_path are both {}", self.input_path));
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}
