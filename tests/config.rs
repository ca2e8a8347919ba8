use catapi::cli::Args;
use catapi::config::{Config, FileConfig};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["catapi"];
    argv.extend_from_slice(extra);
    argv.push("categories");
    Args::parse_from(argv)
}

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_defaults_without_any_source() {
    let config = Config::resolve(&args(&[]), &FileConfig::default(), env_of(&[]));
    assert_eq!(config.api_key, None);
    assert_eq!(config.base_url, "http://thecatapi.com/api/");
    assert!(!config.verbose);
}

#[test]
fn test_cli_beats_env_beats_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catapi.yaml");
    fs::write(
        &path,
        "api:\n  key: file-key\n  base_url: http://file.example/api/\nsession:\n  verbose: true\n",
    )
    .unwrap();
    let file = FileConfig::load_from(&path).unwrap();

    let from_file = Config::resolve(&args(&[]), &file, env_of(&[]));
    assert_eq!(from_file.api_key.as_deref(), Some("file-key"));
    assert_eq!(from_file.base_url, "http://file.example/api/");
    assert!(from_file.verbose);

    let env = env_of(&[
        ("CATAPI_API_KEY", "env-key"),
        ("CATAPI_VERBOSE", "no"),
    ]);
    let from_env = Config::resolve(&args(&[]), &file, env);
    assert_eq!(from_env.api_key.as_deref(), Some("env-key"));
    assert!(!from_env.verbose);

    let from_cli = Config::resolve(
        &args(&["--api-key", "cli-key", "--base-url", "http://cli.example/"]),
        &file,
        env_of(&[("CATAPI_API_KEY", "env-key")]),
    );
    assert_eq!(from_cli.api_key.as_deref(), Some("cli-key"));
    assert_eq!(from_cli.base_url, "http://cli.example/");
}

#[test]
fn test_json_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catapi.json");
    fs::write(&path, r#"{"api": {"key": "json-key"}}"#).unwrap();

    let file = FileConfig::load_from(&path).unwrap();
    assert_eq!(file.api.key.as_deref(), Some("json-key"));
    assert!(file.session.verbose.is_none());
}

#[test]
fn test_broken_config_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catapi.yaml");
    fs::write(&path, "api: [unclosed").unwrap();

    let err = FileConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("catapi.yaml"));
}

#[test]
fn test_file_key_env_expansion() {
    std::env::set_var("CATAPI_TEST_FILE_KEY", "expanded-key");
    let mut file = FileConfig::default();
    file.api.key = Some("${CATAPI_TEST_FILE_KEY}".to_string());

    let config = Config::resolve(&args(&[]), &file, env_of(&[]));
    assert_eq!(config.api_key.as_deref(), Some("expanded-key"));

    file.api.key = Some("${CATAPI_TEST_NEVER_SET_KEY}".to_string());
    let config = Config::resolve(&args(&[]), &file, env_of(&[]));
    assert_eq!(config.api_key, None);
}

#[test]
fn test_empty_api_key_is_ignored() {
    let config = Config::resolve(
        &args(&["--api-key", ""]),
        &FileConfig::default(),
        env_of(&[]),
    );
    assert_eq!(config.api_key, None);
    assert_eq!(config.client_config().api_key(), None);
}

#[test]
fn test_client_config_normalizes_base_url() {
    let config = Config::resolve(
        &args(&["--base-url", "http://localhost:9000/api"]),
        &FileConfig::default(),
        env_of(&[]),
    );
    assert_eq!(config.client_config().base_url(), "http://localhost:9000/api/");
}

#[test]
fn test_write_example_round_trips_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("catapi.yaml");

    FileConfig::write_example(&path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("# catapi configuration"));

    let file = FileConfig::load_from(&path).unwrap();
    assert_eq!(file.api.key.as_deref(), Some("${CATAPI_API_KEY}"));
    assert_eq!(file.api.base_url.as_deref(), Some("http://thecatapi.com/api/"));

    assert!(FileConfig::write_example(&path).is_err());
}

#[test]
fn test_empty_env_values_fall_through_to_file() {
    let mut file = FileConfig::default();
    file.api.key = Some("file-key".to_string());
    file.api.base_url = Some("http://file.example/api/".to_string());
    file.session.verbose = Some(true);

    let env = env_of(&[
        ("CATAPI_API_KEY", ""),
        ("CATAPI_BASE_URL", ""),
        ("CATAPI_VERBOSE", ""),
    ]);
    let config = Config::resolve(&args(&[]), &file, env);
    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.base_url, "http://file.example/api/");
    assert!(config.verbose);
}

#[test]
fn test_empty_values_everywhere_use_defaults() {
    let mut file = FileConfig::default();
    file.api.key = Some(String::new());
    file.api.base_url = Some(String::new());

    let config = Config::resolve(
        &args(&["--base-url", ""]),
        &file,
        env_of(&[("CATAPI_BASE_URL", "")]),
    );
    assert_eq!(config.api_key, None);
    assert_eq!(config.base_url, "http://thecatapi.com/api/");
    assert_eq!(
        config.client_config().base_url(),
        "http://thecatapi.com/api/"
    );
}
