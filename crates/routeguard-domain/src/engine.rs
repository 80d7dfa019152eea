use crate::checks;
use crate::model::RouteTableModel;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use routeguard_types::{Finding, RouteguardData, Severity, Verdict};
use std::collections::BTreeMap;

pub fn evaluate(model: &RouteTableModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, &mut findings);

    // Contract ordering: sources in supplied order, lines ascending within a
    // source. The rank map ties a finding back to its source's position.
    let source_rank: BTreeMap<&str, usize> = model
        .sources
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.path.as_str(), idx))
        .collect();
    findings.sort_by(|a, b| compare_findings(a, b, &source_rank));

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = RouteguardData {
        profile: cfg.profile.clone(),
        routes_dir: cfg.scan.routes_dir.clone(),
        sources_scanned: model.sources.len() as u32,
        declarations_scanned: model.total_declarations() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(
    a: &Finding,
    b: &Finding,
    source_rank: &BTreeMap<&str, usize>,
) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) source position in the scanned set (missing location last)
    // 2) location.line (missing last)
    // 3) code
    // 4) message
    let key = |f: &Finding| match &f.location {
        Some(l) => (
            source_rank.get(l.path.as_str()).copied().unwrap_or(usize::MAX),
            l.line.unwrap_or(u32::MAX),
        ),
        None => (usize::MAX, u32::MAX),
    };

    key(a)
        .cmp(&key(b))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.message.cmp(&b.message))
}
