use crate::{model::RouteguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use routeguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use routeguard_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub routes_dir: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: RouteguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "report".to_string());

    let mut effective = presets::preset(&profile);

    // Scan options: config file first, CLI override for the directory last.
    if let Some(dir) = cfg.routes_dir.clone() {
        effective.scan.routes_dir = dir;
    }
    if let Some(dir) = overrides.routes_dir.clone() {
        effective.scan.routes_dir = dir;
    }
    if let Some(suffix) = cfg.file_suffix.clone() {
        effective.scan.file_suffix = suffix;
    }
    if let Some(marker) = cfg.router_marker.clone() {
        effective.scan.router_marker = marker;
    }
    if let Some(markers) = cfg.method_markers.clone() {
        anyhow::ensure!(
            !markers.is_empty(),
            "method_markers must not be empty; omit the key to use defaults"
        );
        effective.scan.method_markers = markers;
    }

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warn" | "warning" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warn)"),
    }
}
