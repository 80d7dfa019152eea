use routeguard_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
            allow: Vec::new(),
        }
    }
}

/// What to scan and how candidate lines are recognized.
///
/// Defaults reproduce the reference tool: `server/routes`, `.js` files,
/// Express `router.` registrations with the five common method calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanPolicy {
    pub routes_dir: String,
    pub file_suffix: String,
    pub router_marker: String,
    pub method_markers: Vec<String>,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            routes_dir: "server/routes".to_string(),
            file_suffix: ".js".to_string(),
            router_marker: "router.".to_string(),
            method_markers: ["get(", "post(", "put(", "delete(", "patch("]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub scan: ScanPolicy,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
