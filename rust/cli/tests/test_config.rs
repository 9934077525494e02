use serial_test::serial;
use serde_json::Value;
use showdown_cli::run;
use std::io::Write;

const VARS: &[&str] = &[
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_SEED",
    "SHOWDOWN_GAMES",
    "SHOWDOWN_OPPONENTS",
    "SHOWDOWN_FORMAT",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn cfg_json() -> (i32, Value) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json)
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["opponents"]["value"].as_u64(), Some(4));
    assert_eq!(json["opponents"]["source"].as_str(), Some("default"));
    assert_eq!(json["format"]["value"].as_str(), Some("csv"));
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 11\nopponents = 6\nformat = \"jsonl\"").unwrap();
    unsafe {
        std::env::set_var("SHOWDOWN_CONFIG", file.path());
        std::env::set_var("SHOWDOWN_SEED", "99");
    }
    let (code, json) = cfg_json();
    clear_env();

    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"].as_u64(), Some(99));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["opponents"]["value"].as_u64(), Some(6));
    assert_eq!(json["opponents"]["source"].as_str(), Some("file"));
    assert_eq!(json["format"]["value"].as_str(), Some("jsonl"));
    assert_eq!(json["games"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn invalid_env_value_is_a_config_error() {
    clear_env();
    unsafe {
        std::env::set_var("SHOWDOWN_OPPONENTS", "0");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("opponents must be between 1 and 22"));
}

#[test]
#[serial]
fn configured_games_drive_sim() {
    clear_env();
    unsafe {
        std::env::set_var("SHOWDOWN_GAMES", "7");
        std::env::set_var("SHOWDOWN_SEED", "5");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "sim"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 0);
    assert_eq!(String::from_utf8_lossy(&out).lines().count(), 7);
    assert!(String::from_utf8_lossy(&err).contains("Simulated: 7 games"));
}
