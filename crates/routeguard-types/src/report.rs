use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for routeguard reports.
pub const SCHEMA_REPORT_V1: &str = "routeguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: SourcePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending. Typically a hash of:
    /// `check_id + code + canonical_path + (line?) + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Routeguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct RouteguardData {
    pub profile: String,
    pub routes_dir: String,

    pub sources_scanned: u32,
    pub declarations_scanned: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// The emitted report envelope (`routeguard.report.v1`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteguardReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: RouteguardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn report_round_trips_through_json() {
        let report = RouteguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "routeguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            verdict: Verdict::Warn,
            findings: vec![Finding {
                severity: Severity::Warning,
                check_id: crate::ids::CHECK_ROUTES_PATH_SYNTAX.to_string(),
                code: crate::ids::CODE_TRAILING_COLON.to_string(),
                message: "route path '/users/:' ends with a bare parameter marker".to_string(),
                location: Some(Location {
                    path: SourcePath::new("userRoutes.js"),
                    line: Some(12),
                    col: None,
                }),
                help: None,
                url: None,
                fingerprint: None,
                data: serde_json::json!({"pattern": "/users/:"}),
            }],
            data: RouteguardData {
                profile: "report".to_string(),
                routes_dir: "server/routes".to_string(),
                sources_scanned: 1,
                declarations_scanned: 3,
                findings_total: 1,
                findings_emitted: 1,
                truncated_reason: None,
            },
        };

        let json = serde_json::to_string_pretty(&report).expect("serialize");
        let back: RouteguardReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
        assert!(json.contains("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn optional_finding_fields_are_omitted() {
        let finding = Finding {
            severity: Severity::Info,
            check_id: "routes.path_syntax".to_string(),
            code: "double_colon".to_string(),
            message: "m".to_string(),
            location: None,
            help: None,
            url: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let json = serde_json::to_string(&finding).expect("serialize");
        assert!(!json.contains("location"));
        assert!(!json.contains("fingerprint"));
        assert!(!json.contains("data"));
    }
}
