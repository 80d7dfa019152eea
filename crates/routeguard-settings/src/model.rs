use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `routeguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteguardConfigV1 {
    /// Optional schema string for tooling (`routeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Directory holding route sources, relative to the invocation root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes_dir: Option<String>,

    /// Suffix a file must carry to be scanned (default `.js`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,

    /// Substring marking a router-registration call (default `router.`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_marker: Option<String>,

    /// HTTP-method call markers; a candidate line must contain one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_markers: Option<Vec<String>>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Glob patterns for source paths exempt from the check.
    #[serde(default)]
    pub allow: Vec<String>,
}
