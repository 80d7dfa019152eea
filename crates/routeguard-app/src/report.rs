use anyhow::Context;
use routeguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use routeguard_types::{
    Finding, RouteguardData, RouteguardReport, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<RouteguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    let report: RouteguardReport =
        serde_json::from_value(value).context("parse routeguard report")?;
    Ok(report)
}

pub fn serialize_report(report: &RouteguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &RouteguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        help: f.help.clone(),
        url: f.url.clone(),
        excerpt: f.data.get("line_text").and_then(|v| v.as_str()).map(String::from),
        pattern: f.data.get("pattern").and_then(|v| v.as_str()).map(String::from),
    }
}

/// Report emitted when the tool itself fails (unreadable routes directory,
/// broken config): a single `tool.runtime` finding with verdict fail.
pub fn runtime_error_report(message: &str) -> RouteguardReport {
    let now = OffsetDateTime::now_utc();
    let data = RouteguardData {
        profile: "unknown".to_string(),
        routes_dir: String::new(),
        sources_scanned: 0,
        declarations_scanned: 0,
        findings_total: 1,
        findings_emitted: 1,
        truncated_reason: None,
    };

    RouteguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "routeguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: routeguard_types::ids::CHECK_TOOL_RUNTIME.to_string(),
            code: routeguard_types::ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run routeguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_round_trips() {
        let report = runtime_error_report("boom");
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let back = parse_report_json(&text).expect("parse");
        assert_eq!(back.verdict, Verdict::Fail);
        assert_eq!(back.findings[0].code, "runtime_error");
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json("{\"schema\": \"other.report.v9\"}").unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn renderable_carries_excerpt_and_pattern_from_payload() {
        let mut report = runtime_error_report("x");
        report.findings[0].data = serde_json::json!({
            "pattern": "/a::b",
            "line_text": "router.post('/a::b', h)",
        });
        let renderable = to_renderable(&report);
        assert_eq!(renderable.findings[0].pattern.as_deref(), Some("/a::b"));
        assert_eq!(
            renderable.findings[0].excerpt.as_deref(),
            Some("router.post('/a::b', h)")
        );
    }
}
