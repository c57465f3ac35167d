use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shapeboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shapeboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn shapeboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive drawing surface with measurable shapes",
        ));
}

#[test]
fn no_arguments_prints_usage() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn polygon_clicks_print_area() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .args(["--tool", "polygon", "-c", "0,0", "-c", "2,0", "-c", "2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("area: 2.000"));
}

#[test]
fn ruler_keeps_last_two_clicks() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .args([
            "--tool", "ruler", "-c", "100,100", "-c", "200,200", "-c", "0,0", "-c", "3,4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("length: 5.000"));
}

#[test]
fn negative_radius_fails() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .args(["--radius=-2", "-c", "10,10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radius cannot be negative"))
        .stderr(predicate::str::contains("pass --radius 0 or larger"));
}

#[test]
fn version_includes_build_hash() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn schema_dump_lists_config_sections() {
    let output = Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("drawing"));
    assert!(properties.contains_key("canvas"));
}

#[test]
fn malformed_click_is_rejected() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .args(["-c", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

#[test]
fn output_writes_png() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("board.png");
    shapeboard_cmd(&temp)
        .args(["--radius", "20", "--width", "64", "--height", "64", "-c", "32,32", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn config_file_sets_default_radius() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("shapeboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[drawing]\ndefault_radius = 1.0\n",
    )
    .unwrap();

    shapeboard_cmd(&temp)
        .args(["-c", "0,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("area: 3.142"));
}

#[test]
fn init_config_writes_example() {
    let temp = TempDir::new().unwrap();
    shapeboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let written = std::fs::read_to_string(temp.path().join("shapeboard/config.toml")).unwrap();
    assert!(written.contains("default_radius"));

    shapeboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
