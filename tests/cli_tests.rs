//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_CONFIG: &str = r#"{
    "publicAddress": "1.2.3.4",
    "assetServer": {"port": 8080},
    "gatewayServers": {
        "gw1": {"httpAddress": "10.0.0.1:9000"},
        "gw2": {"httpAddress": "10.0.0.2:9001"}
    }
}"#;

fn write_config(run_dir: &Path, name: &str, content: &str) {
    let dir = run_dir.join("config");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(dir.join(format!("{name}.json")), content).expect("write config");
}

fn confgen() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("online-confgen"))
}

#[test]
fn test_cli_version() {
    let mut cmd = confgen();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("online-confgen"));
}

#[test]
fn test_cli_help() {
    let mut cmd = confgen();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_render_requires_run_dir() {
    let mut cmd = confgen();
    cmd.arg("render");
    cmd.assert().failure().stderr(predicate::str::contains("RUN_DIR"));
}

#[test]
fn test_render_writes_both_configs_for_production() {
    let run = TempDir::new().expect("run dir");
    write_config(run.path(), "production", SAMPLE_CONFIG);

    let mut cmd = confgen();
    cmd.args(["render", run.path().to_str().expect("utf8 path")]);
    cmd.assert().success().stdout(predicate::str::contains("nginx.conf"));

    let nginx = fs::read_to_string(run.path().join("nginx.conf")).expect("nginx.conf");
    assert!(nginx.contains("server_name 1.2.3.4;"));
    assert!(nginx.contains("proxy_pass http://online:8080;"));
    assert!(nginx
        .contains("\n        server online:9000; # gw1\n        server online:9001; # gw2"));

    let haproxy = fs::read_to_string(run.path().join("haproxy.cfg")).expect("haproxy.cfg");
    assert!(haproxy.contains("server assets online:8080 check"));
    assert!(haproxy.contains(
        "\n  server gw1 online:9000 check cookie gw1\n  server gw2 online:9001 check cookie gw2"
    ));
}

#[test]
fn test_render_uses_named_config_and_single_target() {
    let run = TempDir::new().expect("run dir");
    write_config(run.path(), "staging", SAMPLE_CONFIG);

    let mut cmd = confgen();
    cmd.args(["render", run.path().to_str().expect("utf8 path"), "staging", "--target", "haproxy"]);
    cmd.assert().success();

    assert!(run.path().join("haproxy.cfg").exists());
    assert!(!run.path().join("nginx.conf").exists());
}

#[test]
fn test_render_with_custom_template_dir() {
    let run = TempDir::new().expect("run dir");
    let templates = TempDir::new().expect("template dir");
    write_config(
        run.path(),
        "production",
        r#"{"publicAddress": "1.2.3.4", "assetServer": {"port": 8080}, "gatewayServers": {},
            "terminal": {"internalAddress": "10.0.0.5", "socketioPort": 3000}}"#,
    );
    fs::write(
        templates.path().join("nginx-template.conf"),
        "server {{\n    server_name {publicAddress};\n    location / {{ proxy_pass http://{online}; }}\n    location /terminal {{ proxy_pass http://{terminal}; }}\n}}\n# gateways:{gateways}\n",
    )
    .expect("write template");

    let mut cmd = confgen();
    cmd.args([
        "render",
        run.path().to_str().expect("utf8 path"),
        "--target",
        "nginx",
        "--template-dir",
        templates.path().to_str().expect("utf8 path"),
    ]);
    cmd.assert().success();

    let nginx = fs::read_to_string(run.path().join("nginx.conf")).expect("nginx.conf");
    assert_eq!(
        nginx,
        "server {\n    server_name 1.2.3.4;\n    location / { proxy_pass http://online:8080; }\n    location /terminal { proxy_pass http://10.0.0.5:3000; }\n}\n# gateways:\n"
    );
}

#[test]
fn test_render_missing_config_fails() {
    let run = TempDir::new().expect("run dir");
    let mut cmd = confgen();
    cmd.args(["render", run.path().to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_render_invalid_config_lists_all_problems_and_writes_nothing() {
    let run = TempDir::new().expect("run dir");
    write_config(run.path(), "production", r#"{"gatewayServers": {"gw1": {}}}"#);

    let mut cmd = confgen();
    cmd.args(["render", run.path().to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("publicAddress"))
        .stderr(predicate::str::contains("assetServer"))
        .stderr(predicate::str::contains("gatewayServers.gw1.httpAddress"));

    assert!(!run.path().join("nginx.conf").exists());
    assert!(!run.path().join("haproxy.cfg").exists());
}

#[test]
fn test_render_bad_template_writes_no_target() {
    let run = TempDir::new().expect("run dir");
    let templates = TempDir::new().expect("template dir");
    write_config(run.path(), "production", SAMPLE_CONFIG);
    fs::write(
        templates.path().join("nginx-template.conf"),
        "{publicAddress} {online} {gateways}\n",
    )
    .expect("write nginx template");
    fs::write(templates.path().join("haproxy-template.cfg"), "{publicAddress} {online}\n")
        .expect("write haproxy template");

    let mut cmd = confgen();
    cmd.args([
        "render",
        run.path().to_str().expect("utf8 path"),
        "--template-dir",
        templates.path().to_str().expect("utf8 path"),
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("gateways"));

    assert!(!run.path().join("nginx.conf").exists());
}

#[test]
fn test_render_to_separate_output_dir() {
    let run = TempDir::new().expect("run dir");
    let out = TempDir::new().expect("out dir");
    write_config(run.path(), "production", SAMPLE_CONFIG);

    let mut cmd = confgen();
    cmd.args([
        "render",
        run.path().to_str().expect("utf8 path"),
        "--output-dir",
        out.path().to_str().expect("utf8 path"),
    ]);
    cmd.assert().success();

    assert!(out.path().join("nginx.conf").exists());
    assert!(out.path().join("haproxy.cfg").exists());
    assert!(!run.path().join("nginx.conf").exists());
}

#[test]
fn test_convert_defaults_to_working_directory() {
    let work = TempDir::new().expect("work dir");
    fs::write(work.path().join("problems.csv"), "a,b,c,Hello,\"opt1\nopt2\",42\n").expect("csv");

    let mut cmd = confgen();
    cmd.current_dir(work.path()).arg("convert");
    cmd.assert().success().stdout(predicate::str::contains("Converted 1 problem(s)"));

    let json = fs::read_to_string(work.path().join("problems.json")).expect("problems.json");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(
        parsed,
        serde_json::json!([{"dialogs": "Hello", "options": ["opt1", "opt2"], "ans": "42"}])
    );
}

#[test]
fn test_convert_empty_csv_writes_empty_list() {
    let work = TempDir::new().expect("work dir");
    fs::write(work.path().join("problems.csv"), "").expect("csv");

    let mut cmd = confgen();
    cmd.current_dir(work.path()).args(["convert", "out.json"]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(work.path().join("out.json")).expect("out.json"), "[]");
}

#[test]
fn test_convert_short_row_fails_without_output() {
    let work = TempDir::new().expect("work dir");
    fs::write(work.path().join("quiz.csv"), "a,b,c,d,e,f\na,b\n").expect("csv");

    let mut cmd = confgen();
    cmd.current_dir(work.path()).args(["convert", "--input", "quiz.csv"]);
    cmd.assert().failure().stderr(predicate::str::contains("Row 2 has 2 column(s)"));

    assert!(!work.path().join("problems.json").exists());
}
