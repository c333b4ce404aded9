use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    race_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let race_path = dir.path().join("race.json");

        let mut race_file = File::create(&race_path).unwrap();
        writeln!(
            race_file,
            r#"{{
                "racers": [
                    {{"name": "A", "signatureMap": "Forest"}},
                    {{"name": "B", "signatureMap": ""}}
                ],
                "maps": [{{"name": "Forest", "times": ["1'00'00", "1'02'00"]}}],
                "firstMapBtc": "Forest"
            }}"#
        )
        .unwrap();

        Self { dir, race_path }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }
}

fn lapboard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lapboard"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_score_table() {
    let ctx = TestContext::new();
    let output = lapboard(&["score", ctx.race_path.to_str().unwrap()]);
    assert!(output.status.success());

    let out = stdout(&output);
    let first = Regex::new(r"\|\s*1\s*\|\s*A\s*\|\s*Forest\s*\|\s*12\s*\|").unwrap();
    let second = Regex::new(r"\|\s*2\s*\|\s*B\s*\|\s*\|\s*8\s*\|").unwrap();
    assert!(first.is_match(&out), "STDOUT:\n{}", out);
    assert!(second.is_match(&out), "STDOUT:\n{}", out);
    assert!(out.contains("Forest [BTC]"));
}

#[test]
fn test_cli_score_json() {
    let ctx = TestContext::new();
    let output = lapboard(&["score", "--json", ctx.race_path.to_str().unwrap()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["matrix"], serde_json::json!([[12, 8]]));
    assert_eq!(value["ranking"][0]["name"], "A");
    assert_eq!(value["ranking"][1]["rank"], 2);
}

#[test]
fn test_cli_rule_overrides() {
    let ctx = TestContext::new();
    let rules = ctx.write("rules.json", r#"{"points_signature_win": 50, "points_base": 30}"#);

    let output = lapboard(&[
        "score",
        "--json",
        "--rules",
        rules.to_str().unwrap(),
        "--points-base",
        "20",
        ctx.race_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    // Signature win from the file, base from the flag (20 - 2)
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["matrix"], serde_json::json!([[50, 18]]));
}

#[test]
fn test_cli_csv_and_multiple_races() {
    let ctx = TestContext::new();
    let sheet = ctx.write(
        "sheet.csv",
        "map,X,Y\nHarbor,0'40'00,0'40'00\nCanyon,,0'50'00\n",
    );

    let output = lapboard(&[
        "score",
        "--json",
        ctx.race_path.to_str().unwrap(),
        sheet.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 2);
    // Output order follows argument order
    let sheet_value: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(sheet_value["matrix"], serde_json::json!([[11, 11], [0, 11]]));
    assert_eq!(sheet_value["ranking"][0]["name"], "Y");
}

#[test]
fn test_cli_failing_race_sets_exit_code() {
    let ctx = TestContext::new();
    let output = lapboard(&["score", ctx.race_path.to_str().unwrap(), "missing.json"]);
    assert!(!output.status.success());
    // The readable race is still reported
    assert!(stdout(&output).contains("Forest"));
}

#[test]
fn test_cli_decode() {
    let output = lapboard(&["decode", "1'23'45", "abc", "12345"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(Regex::new(r"1'23'45\s*\|\s*83\.45\s*\|\s*01'23'45").unwrap().is_match(&out));
    assert!(Regex::new(r"abc\s*\|\s*invalid\s*\|\s*--'--'--").unwrap().is_match(&out));
}
