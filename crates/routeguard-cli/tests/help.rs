use assert_cmd::Command;

/// Helper to get a Command for the routeguard binary.
#[allow(deprecated)]
fn routeguard_cmd() -> Command {
    Command::cargo_bin("routeguard").unwrap()
}

#[test]
fn help_works() {
    routeguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_works() {
    routeguard_cmd().args(["check", "--help"]).assert().success();
}

#[test]
fn version_works() {
    routeguard_cmd().arg("--version").assert().success();
}
