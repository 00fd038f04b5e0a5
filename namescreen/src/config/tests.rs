//! Tests for configuration loading and merging.

use super::*;
use std::io::Write;

#[test]
fn defaults_extract_cleanly() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config.thresholds.high, 85.0);
    assert_eq!(config.thresholds.medium, 70.0);
    assert!(config.variants.augmentation);
    assert!(config.services.ner.endpoint.is_none());
}

#[test]
fn toml_file_overrides_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[thresholds]
high = 90.0
medium = 75.0

[variants]
augmentation = false

[services.ner]
endpoint = "http://localhost:8090/extract"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .load_file(file.path())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.thresholds.high, 90.0);
    assert_eq!(config.thresholds.medium, 75.0);
    assert!(!config.variants.augmentation);
    assert_eq!(
        config.services.ner.endpoint.as_deref(),
        Some("http://localhost:8090/extract")
    );
    // Untouched sections keep their defaults
    assert_eq!(config.extraction.min_candidate_chars, 2);
}

#[test]
fn missing_file_is_an_error() {
    let result = ConfigLoader::new().load_file("/no/such/namescreen.toml");
    assert!(matches!(result, Err(ConfigError::FileLoadError(_))));
}

#[test]
fn invalid_threshold_partition_fails_the_build() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[thresholds]
high = 70.0
medium = 85.0
"#
    )
    .unwrap();

    let result = ConfigLoader::new()
        .load_file(file.path())
        .unwrap()
        .build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn timeouts_parse_humantime_strings() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[services.generative]
timeout = "30s"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .load_file(file.path())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        config.services.generative.timeout,
        std::time::Duration::from_secs(30)
    );
}
