use routeguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, ScanPolicy};
use routeguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// `report` matches the reference tool: findings are warnings, the process
/// exits 0. `strict` turns findings into errors for CI gating.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        // default
        _ => report_profile(),
    }
}

fn report_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "report".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        scan: ScanPolicy::default(),
        checks: default_checks(Severity::Warning),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        scan: ScanPolicy::default(),
        checks: default_checks(Severity::Error),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use routeguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_ROUTES_PATH_SYNTAX.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
