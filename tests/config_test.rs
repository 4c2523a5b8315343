//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use axonmorph::config::{local_config_path, Settings, DEFAULT_DEPTH_ORDER};
use axonmorph::domain::NodeType;
use axonmorph::ApplicationError;

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let project_dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    assert_eq!(settings.origin_type, NodeType::Axon);
    assert_eq!(settings.depth_order, DEFAULT_DEPTH_ORDER);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let project_dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(project_dir.path()),
        "origin_type = 3\ndepth_order = 8\n",
    )
    .unwrap();

    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    assert_eq!(settings.origin_type, NodeType::BasalDendrite);
    assert_eq!(settings.depth_order, 8);
}

#[test]
fn given_partial_local_config_when_load_then_keeps_other_defaults() {
    let project_dir = TempDir::new().unwrap();
    fs::write(local_config_path(project_dir.path()), "depth_order = 1\n").unwrap();

    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    assert_eq!(settings.origin_type, NodeType::Axon);
    assert_eq!(settings.depth_order, 1);
}

#[test]
fn given_malformed_local_config_when_load_then_config_error() {
    let project_dir = TempDir::new().unwrap();
    fs::write(local_config_path(project_dir.path()), "depth_order = \"many\"\n").unwrap();

    let result = Settings::load(Some(project_dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_effective_settings_when_rendered_then_round_trips_through_local_config() {
    let project_dir = TempDir::new().unwrap();
    let settings = Settings {
        origin_type: NodeType::Custom(9),
        depth_order: 4,
    };
    fs::write(local_config_path(project_dir.path()), settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load(Some(project_dir.path())).expect("load settings");

    assert_eq!(loaded, settings);
}
