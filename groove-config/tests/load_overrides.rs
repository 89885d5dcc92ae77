use std::collections::HashMap;
use std::fs;
use std::path::Path;

use groove_config::loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV};
use groove_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigSource, RuntimeOverrides, load,
};
use groove_core::Tuning;

fn env_of(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn explicit_toml_file_overrides_selected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuning.toml");
    fs::write(
        &path,
        r#"
[input]
wheel_cooldown_ms = 200

[turntable]
drag_stiffness = 600.0
"#,
    )
    .unwrap();

    let loaded = load(Some(&path)).unwrap();
    assert_eq!(loaded.source, ConfigSource::Explicit(path.clone()));
    assert_eq!(loaded.tuning.input.wheel_cooldown_ms, 200);
    assert_eq!(loaded.tuning.turntable.drag_spring.stiffness, 600.0);
    assert_eq!(loaded.tuning.layout, Tuning::default().layout);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn env_path_wins_over_inline_json_and_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("from-env.json");
    fs::write(&env_file, r#"{"input": {"swipe_threshold": 80.0}}"#).unwrap();
    fs::write(dir.path().join("groove.toml"), "[input]\nswipe_threshold = 10.0\n")
        .unwrap();

    let env = env_of(&[
        (CONFIG_PATH_ENV, env_file.display().to_string()),
        (CONFIG_JSON_ENV, r#"{"input": {"swipe_threshold": 5.0}}"#.to_owned()),
    ]);
    let (overrides, source) = RuntimeOverrides::load_with(env, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvPath(env_file));
    assert_eq!(overrides.input.swipe_threshold, Some(80.0));
}

#[test]
fn inline_json_wins_over_candidates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("groove.toml"), "[input]\nswipe_threshold = 10.0\n")
        .unwrap();

    let env = env_of(&[(
        CONFIG_JSON_ENV,
        r#"{"stack": {"render_radius": 3}}"#.to_owned(),
    )]);
    let (overrides, source) = RuntimeOverrides::load_with(env, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvInline);
    assert_eq!(overrides.stack.render_radius, Some(3));
    assert_eq!(overrides.input.swipe_threshold, None);
}

#[test]
fn candidate_files_are_searched_in_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config/groove.json"),
        r#"{"layout": {"mobile_spacing": 100.0}}"#,
    )
    .unwrap();

    let (overrides, source) = RuntimeOverrides::load_with(no_env, dir.path()).unwrap();
    assert_eq!(
        source,
        ConfigSource::File(dir.path().join("config/groove.json"))
    );
    assert_eq!(overrides.layout.mobile_spacing(), 100.0);

    fs::write(dir.path().join("groove.json"), "{}").unwrap();
    let (_, source) = RuntimeOverrides::load_with(no_env, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(dir.path().join("groove.json")));
}

#[test]
fn nothing_configured_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (overrides, source) = RuntimeOverrides::load_with(no_env, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::Default);
    assert!(overrides.is_empty());
    assert_eq!(overrides.to_tuning(), Tuning::default());
}

#[test]
fn extensionless_file_accepts_either_format() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("tuning");
    fs::write(&toml_path, "[stack]\nactive_scale = 1.1\n").unwrap();
    let overrides = RuntimeOverrides::load_from_file(&toml_path).unwrap();
    assert_eq!(overrides.stack.active_scale, Some(1.1));

    fs::write(&toml_path, r#"{"stack": {"active_scale": 1.2}}"#).unwrap();
    let overrides = RuntimeOverrides::load_from_file(&toml_path).unwrap();
    assert_eq!(overrides.stack.active_scale, Some(1.2));
}

#[test]
fn missing_file_reports_its_path() {
    let err = RuntimeOverrides::load_from_file(Path::new("/nonexistent/groove.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/groove.toml"));
}

#[test]
fn guard_rails_run_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[turntable]\ncompletion_angle = 200.0\n").unwrap();

    let err = load(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::CompletionUnreachable { .. })
    ));

    fs::write(&path, "[input]\nwheel_cooldown_ms = 0\n").unwrap();
    let loaded = load(Some(&path)).unwrap();
    assert_eq!(loaded.warnings.len(), 1);
}
