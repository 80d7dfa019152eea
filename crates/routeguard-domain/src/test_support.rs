use crate::model::{RouteDeclaration, RouteSourceModel, RouteTableModel};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, ScanPolicy};
use routeguard_types::{Severity, SourcePath};
use std::collections::BTreeMap;

pub fn decl(line: u32, raw: &str, pattern: Option<&str>) -> RouteDeclaration {
    RouteDeclaration {
        line,
        raw_text: raw.to_string(),
        pattern: pattern.map(|p| p.to_string()),
    }
}

pub fn source(path: &str, declarations: Vec<RouteDeclaration>) -> RouteSourceModel {
    RouteSourceModel {
        path: SourcePath::new(path),
        lines_scanned: declarations.len() as u32,
        declarations,
    }
}

pub fn model(sources: Vec<RouteSourceModel>) -> RouteTableModel {
    RouteTableModel {
        scan_root: SourcePath::new("server/routes"),
        sources,
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        scan: ScanPolicy::default(),
        checks,
    }
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut cfg = config_with_check(check_id, severity);
    let policy = cfg.checks.get_mut(check_id).expect("check just inserted");
    policy.allow = allow.into_iter().map(|a| a.to_string()).collect();
    cfg
}
