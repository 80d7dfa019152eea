//! Behavioral CLI tests: stdout format, ordering, exit codes, and the
//! secondary commands (`md`, `annotations`, `explain`).

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn routeguard_cmd() -> Command {
    Command::cargo_bin("routeguard").unwrap()
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

#[test]
fn check_prints_reference_diagnostics_and_exits_zero_on_report_profile() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/wishRoutes.js"),
        "router.get('/wishes/:', protect, getWishes);\n",
    );

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ISSUE in wishRoutes.js line 1:")
                .and(predicate::str::contains(
                    "  router.get('/wishes/:', protect, getWishes);",
                ))
                .and(predicate::str::contains("  Route path: \"/wishes/:\"")),
        );
}

#[test]
fn check_is_silent_when_clean() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/clean.js"),
        "router.get('/users/:id', h);\n",
    );

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn issues_are_ordered_by_source_then_line() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/bRoutes.js"),
        "router.get('/b/:', h);\n",
    );
    write_file(
        &tmp.path().join("server/routes/aRoutes.js"),
        "router.get('/a/:id', h);\nrouter.get('/a::x', h);\nrouter.get('/a/:', h);\n",
    );

    let output = routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");

    let a2 = stdout.find("ISSUE in aRoutes.js line 2:").expect("a line 2");
    let a3 = stdout.find("ISSUE in aRoutes.js line 3:").expect("a line 3");
    let b1 = stdout.find("ISSUE in bRoutes.js line 1:").expect("b line 1");
    assert!(a2 < a3 && a3 < b1, "unexpected order:\n{stdout}");
}

#[test]
fn strict_profile_override_exits_two() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/x.js"),
        "router.get('/x::y', h);\n",
    );

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("--profile")
        .arg("strict")
        .arg("check")
        .assert()
        .code(2);
}

#[test]
fn missing_routes_dir_exits_one_and_writes_runtime_error_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("out/report.json");

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("routeguard error:"));

    let text = std::fs::read_to_string(&report_path).expect("runtime error report written");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse report");
    assert_eq!(value["verdict"], "fail");
    assert_eq!(value["findings"][0]["check_id"], "tool.runtime");
    assert_eq!(value["findings"][0]["code"], "runtime_error");
}

#[test]
fn routes_dir_override_points_the_scan() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("api/routes.js"),
        "router.get('/api/:', h);\n",
    );

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("--routes-dir")
        .arg("api")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ISSUE in routes.js line 1:"));
}

#[test]
fn md_renders_from_written_report() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/x.js"),
        "router.get('/x/:', h);\n",
    );
    let report_path = tmp.path().join("report.json");

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    routeguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Routeguard report")
                .and(predicate::str::contains("`trailing_colon`")),
        );
}

#[test]
fn annotations_render_from_written_report() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/x.js"),
        "router.get('/x/:', h);\n",
    );
    let report_path = tmp.path().join("report.json");

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    routeguard_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("::warning file=x.js,line=1::"));
}

#[test]
fn explain_known_code_succeeds() {
    routeguard_cmd()
        .args(["explain", "trailing_colon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trailing Parameter Marker"));
}

#[test]
fn explain_unknown_identifier_fails_with_listing() {
    routeguard_cmd()
        .args(["explain", "bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available check_ids:"));
}

#[test]
fn write_markdown_produces_artifact() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("server/routes/x.js"),
        "router.get('/x/:', h);\n",
    );
    let md_path = tmp.path().join("artifacts/comment.md");

    routeguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("markdown written");
    assert!(md.contains("# Routeguard report"));
}
