//! # Configuration Tests
//!
//! Defaults and JSON deserialization.

use mipsim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.data_bytes, 1 << 20);
    assert!(!config.memory.protect_program_region);
    assert_eq!(config.pipeline.kind, PipelineKind::FiveStage);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "memory": { "data_bytes": 4096 } }"#).unwrap();
    assert_eq!(config.memory.data_bytes, 4096);
    assert!(!config.memory.protect_program_region);
    assert_eq!(config.pipeline, PipelineConfig::default());
}

#[test]
fn test_pipeline_kind_names() {
    for (json, kind) in [
        ("Unpipelined", PipelineKind::Unpipelined),
        ("FiveStage", PipelineKind::FiveStage),
        ("DualTrack", PipelineKind::DualTrack),
    ] {
        let text = format!(r#"{{ "pipeline": {{ "kind": "{json}" }} }}"#);
        assert_eq!(Config::from_json(&text).unwrap().pipeline.kind, kind);
    }
}

#[test]
fn test_unknown_pipeline_kind_rejected() {
    assert!(Config::from_json(r#"{ "pipeline": { "kind": "OutOfOrder" } }"#).is_err());
}
