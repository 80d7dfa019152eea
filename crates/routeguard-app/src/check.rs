//! The `check` use case: scan route sources and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use routeguard_settings::{Overrides, ResolvedConfig};
use routeguard_types::{RouteguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Invocation root; the configured routes directory is resolved against it.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: RouteguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, scan route sources, evaluate rules, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        routeguard_settings::RouteguardConfigV1::default()
    } else {
        routeguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = routeguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = routeguard_scan::build_route_table_model(input.root, &resolved.effective.scan)
        .context("scan route sources")?;

    let domain_report = routeguard_domain::evaluate(&model, &resolved.effective);
    let routeguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts: _,
    } = domain_report;

    let finished_at = OffsetDateTime::now_utc();

    let report = RouteguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "routeguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn empty_config_uses_defaults_and_scans_reference_layout() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(
            &root.join("server/routes/userRoutes.js"),
            "router.get('/users/:id', h);\nrouter.get('/users/:', h);\n",
        );

        let input = CheckInput {
            root,
            config_text: "",
            overrides: Overrides::default(),
        };

        let output = run_check(input).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "report");
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(output.report.findings.len(), 1);
        assert_eq!(output.report.data.sources_scanned, 1);
        assert_eq!(output.report.data.declarations_scanned, 2);
    }

    #[test]
    fn strict_profile_fails_the_run() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(
            &root.join("server/routes/a.js"),
            "router.post('/a::b', h);\n",
        );

        let input = CheckInput {
            root,
            config_text: "profile = \"strict\"\n",
            overrides: Overrides::default(),
        };

        let output = run_check(input).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Fail);
    }

    #[test]
    fn missing_routes_dir_is_an_error() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        let input = CheckInput {
            root,
            config_text: "",
            overrides: Overrides::default(),
        };

        let err = run_check(input).unwrap_err();
        assert!(format!("{err:#}").contains("scan route sources"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
