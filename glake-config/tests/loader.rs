use std::fs;

use glake_config::{HomeVarEntry, Loader};
use tempfile::tempdir;

#[test]
fn user_file_layers_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glake.toml");
    fs::write(
        &path,
        r#"
[scan]
escape_rune = "^"

[home_vars]
home = false

[[home_vars.entries]]
name = "~src"
path = "/srv/src/"
"#,
    )
    .unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    assert_eq!(config.scan_options().escape, '^');
    assert_eq!(config.scan.max_quoted_len, 3000);
    assert!(!config.home_vars.home);
    assert_eq!(
        config.home_vars.entries,
        vec![HomeVarEntry {
            name: "~src".to_string(),
            path: "/srv/src/".to_string(),
        }]
    );
    let hv = config.home_vars();
    assert_eq!(hv.entries().len(), 1);
    assert_eq!(hv.encode("/srv/src/main.go"), "~src/main.go");
}

#[test]
fn later_files_win() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.toml");
    let second = dir.path().join("b.toml");
    fs::write(&first, "[scan]\nmax_name_len = 10\n").unwrap();
    fs::write(&second, "[scan]\nmax_name_len = 20\n").unwrap();

    let config = Loader::new()
        .with_file(&first)
        .with_file(&second)
        .build()
        .unwrap();
    assert_eq!(config.scan.max_name_len, 20);
}

#[test]
fn missing_required_file_fails() {
    let dir = tempdir().unwrap();
    let result = Loader::new().with_file(dir.path().join("nope.toml")).build();
    assert!(result.is_err());
}

#[test]
fn missing_optional_file_is_ignored() {
    let dir = tempdir().unwrap();
    let config = Loader::new()
        .with_optional_file(dir.path().join("nope.toml"))
        .build()
        .unwrap();
    assert_eq!(config.scan.max_name_len, 100);
}

#[test]
fn malformed_values_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[scan]\nmax_name_len = \"lots\"\n").unwrap();
    assert!(Loader::new().with_file(&path).build().is_err());
}
