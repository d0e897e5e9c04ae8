//! Integration tests for configuration loading: candidate-file discovery,
//! explicit `--config` paths, format dispatch by extension, and the
//! `init`-style default file with comments.

use camino::{Utf8Path, Utf8PathBuf};
use tasktime::config::Config;

/// Fresh scratch directory per test so candidate discovery is isolated.
fn scratch_dir(name: &str) -> Utf8PathBuf {
    let path = std::env::temp_dir().join(format!("tasktime_cfg_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&path).expect("scratch dir should be creatable");
    Utf8PathBuf::from_path_buf(path).expect("temp dir should be UTF-8")
}

#[test]
fn test_no_config_file_yields_defaults() {
    let dir = scratch_dir("defaults");

    let (config, warnings) = Config::load(&dir, None).expect("loading without a file should succeed");

    assert_eq!(config.input_path, "training_task_202503061143.csv");
    assert_eq!(config.output_path, "task_processing_time.png");
    assert_eq!(config.trim_count, 2);
    assert_eq!(config.chart_width, 3600);
    assert_eq!(config.chart_height, 1800);
    assert!(warnings.is_empty(), "defaults should validate cleanly: {warnings:?}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_discovers_yaml_candidate() {
    let dir = scratch_dir("discover_yml");
    std::fs::write(dir.join("tasktime.yml"), "input_path: exports/tasks.csv\ntrim_count: 1\n")
        .expect("writing candidate should succeed");

    let (config, warnings) = Config::load(&dir, None).expect("candidate search should find tasktime.yml");

    assert_eq!(config.input_path, "exports/tasks.csv");
    assert_eq!(config.trim_count, 1);
    // Unset fields fall back to defaults.
    assert_eq!(config.output_path, "task_processing_time.png");
    assert!(warnings.is_empty(), "warnings: {warnings:?}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_toml_candidate_wins_over_yaml() {
    let dir = scratch_dir("precedence");
    std::fs::write(dir.join("tasktime.toml"), "trim_count = 3\n").expect("writing candidate should succeed");
    std::fs::write(dir.join("tasktime.yml"), "trim_count: 9\n").expect("writing candidate should succeed");

    let (config, _) = Config::load(&dir, None).expect("candidate search should succeed");
    assert_eq!(config.trim_count, 3, "tasktime.toml should be preferred over tasktime.yml");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_explicit_json_config() {
    let dir = scratch_dir("explicit_json");
    let path = dir.join("paths.json");
    std::fs::write(&path, r#"{ "input_path": "a.csv", "output_path": "b.png" }"#).expect("writing config should succeed");

    let (config, _) = Config::load(&dir, Some(&path)).expect("explicit JSON config should load");
    assert_eq!(config.input_path, "a.csv");
    assert_eq!(config.output_path, "b.png");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = scratch_dir("explicit_missing");
    let path = dir.join("nope.yml");

    let err = Config::load(&dir, Some(&path)).expect_err("explicit missing config must fail, not fall back");
    assert!(err.to_string().contains("nope.yml"), "unexpected message: {err}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = scratch_dir("unknown_field");
    let path = dir.join("tasktime.yml");
    std::fs::write(&path, "input_pth: typo.csv\n").expect("writing config should succeed");

    let err = Config::load(&dir, Some(&path)).expect_err("unknown fields should be rejected");
    assert!(err.to_string().contains("input_pth"), "unexpected message: {err}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = scratch_dir("bad_ext");
    let path = dir.join("tasktime.ini");
    std::fs::write(&path, "[settings]\n").expect("writing config should succeed");

    let err = Config::load(&dir, Some(&path)).expect_err("unsupported extensions should be rejected");
    assert!(err.to_string().contains("ini"), "unexpected message: {err}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_validation_warns_without_failing() {
    let dir = scratch_dir("warnings");
    let path = dir.join("tasktime.yml");
    std::fs::write(&path, "trim_count: 0\nchart_width: 100\nchart_height: 100\n").expect("writing config should succeed");

    let (config, warnings) = Config::load(&dir, Some(&path)).expect("questionable settings still load");
    assert_eq!(config.trim_count, 0);
    assert!(warnings.iter().any(|w| w.contains("trim_count")), "warnings: {warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("chart dimensions")), "warnings: {warnings:?}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_default_file_keeps_comments_and_round_trips() {
    let dir = scratch_dir("init_default");
    let path = dir.join("tasktime.yml");

    Config::default()
        .save_default_with_comments(&path)
        .expect("writing default config should succeed");

    let text = std::fs::read_to_string(&path).expect("default config should be readable");
    assert!(text.contains('#'), "YAML default should keep its comments");

    let (config, warnings) = Config::load(&dir, Some(&path)).expect("generated default should load back");
    assert_eq!(config.trim_count, 2);
    assert!(warnings.is_empty(), "generated default should validate cleanly: {warnings:?}");

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_default_file_as_toml_round_trips() {
    let dir = scratch_dir("init_toml");
    let path = dir.join("tasktime.toml");

    Config::default()
        .save_default_with_comments(&path)
        .expect("writing default TOML config should succeed");

    let (config, _) = Config::load(&dir, Some(&path)).expect("generated TOML default should load back");
    assert_eq!(config.input_path, "training_task_202503061143.csv");
    assert_eq!(config.chart_height, 1800);

    _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_save_and_reload_preserves_settings() {
    let dir = scratch_dir("save_reload");
    let path = dir.join("custom.yaml");

    let config = Config {
        input_path: Utf8Path::new("exports/march.csv").to_path_buf(),
        trim_count: 3,
        ..Config::default()
    };
    config.save(&path).expect("saving config should succeed");

    let (reloaded, _) = Config::load(&dir, Some(&path)).expect("saved config should load back");
    assert_eq!(reloaded.input_path, "exports/march.csv");
    assert_eq!(reloaded.trim_count, 3);

    _ = std::fs::remove_dir_all(&dir);
}
