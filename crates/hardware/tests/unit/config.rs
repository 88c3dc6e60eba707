//! Configuration defaults and JSON deserialisation.
//!
//! Every section and field is optional; a missing piece falls back to
//! the documented default rather than failing the parse.

use mips_core::config::Config;

#[test]
fn defaults_are_sensible() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert!(!config.general.trace);
    assert_eq!(config.memory.size, 64 * 1024);
}

#[test]
fn empty_document_parses_to_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert!(!config.general.trace);
    assert_eq!(config.memory.size, 64 * 1024);
}

#[test]
fn partial_section_keeps_remaining_defaults() {
    let config: Config = serde_json::from_str(r#"{ "general": { "trace": true } }"#).unwrap();
    assert!(config.general.trace);
    assert_eq!(config.general.start_pc, 0, "unset field should default");
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert_eq!(config.memory.size, 64 * 1024, "unset section should default");
}

#[test]
fn full_document_overrides_everything() {
    let text = r#"
        {
            "general": { "trace": true, "start_pc": 128, "max_cycles": 500 },
            "memory": { "size": 4096 }
        }
    "#;
    let config: Config = serde_json::from_str(text).unwrap();
    assert!(config.general.trace);
    assert_eq!(config.general.start_pc, 128);
    assert_eq!(config.general.max_cycles, 500);
    assert_eq!(config.memory.size, 4096);
}

#[test]
fn wrong_type_is_rejected() {
    let result = serde_json::from_str::<Config>(r#"{ "memory": { "size": "lots" } }"#);
    assert!(result.is_err());
}

#[test]
fn round_trips_through_json() {
    let text = serde_json::to_string(&Config::default()).unwrap();
    let config: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(config.general.start_pc, Config::default().general.start_pc);
    assert_eq!(config.memory.size, Config::default().memory.size);
}
