use crate::checks::utils;
use crate::fingerprint::fingerprint_for_route;
use crate::model::RouteTableModel;
use crate::policy::EffectiveConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use routeguard_types::{ids, Finding, Location};
use serde_json::json;

/// Colon, optional whitespace, then a separator: a parameter marker with no
/// identifier before the next `,`, `)` or `/`.
static EMPTY_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*[,)/]").expect("static pattern must compile"));

/// The malformed-marker rules, in evaluation order.
///
/// A pattern is classified by the FIRST rule that matches; later rules are
/// not consulted, so one root cause yields exactly one finding even when the
/// pattern would also satisfy a later rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathRule {
    EmptyParamBeforeSlash,
    DoubleColon,
    TrailingColon,
    EmptyParam,
}

impl PathRule {
    pub fn code(self) -> &'static str {
        match self {
            PathRule::EmptyParamBeforeSlash => ids::CODE_EMPTY_PARAM_BEFORE_SLASH,
            PathRule::DoubleColon => ids::CODE_DOUBLE_COLON,
            PathRule::TrailingColon => ids::CODE_TRAILING_COLON,
            PathRule::EmptyParam => ids::CODE_EMPTY_PARAM,
        }
    }
}

/// Classify a route path pattern, returning the first matching rule.
pub fn classify(pattern: &str) -> Option<PathRule> {
    if pattern.contains(":/") {
        Some(PathRule::EmptyParamBeforeSlash)
    } else if pattern.contains("::") {
        Some(PathRule::DoubleColon)
    } else if pattern.ends_with(':') {
        Some(PathRule::TrailingColon)
    } else if EMPTY_PARAM.is_match(pattern) {
        Some(PathRule::EmptyParam)
    } else {
        None
    }
}

pub fn run(model: &RouteTableModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_ROUTES_PATH_SYNTAX) else {
        return;
    };
    let allow = utils::build_allowlist(&policy.allow);

    for source in &model.sources {
        if utils::is_allowed(allow.as_ref(), source.path.as_str()) {
            continue;
        }
        for decl in &source.declarations {
            // A candidate with no quoted literal cannot be classified.
            let Some(pattern) = decl.pattern.as_deref() else {
                continue;
            };
            let Some(rule) = classify(pattern) else {
                continue;
            };

            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_ROUTES_PATH_SYNTAX.to_string(),
                code: rule.code().to_string(),
                message: message_for(rule, pattern),
                location: Some(Location {
                    path: source.path.clone(),
                    line: Some(decl.line),
                    col: None,
                }),
                help: Some(help_for(rule).to_string()),
                url: None,
                fingerprint: Some(fingerprint_for_route(
                    ids::CHECK_ROUTES_PATH_SYNTAX,
                    rule.code(),
                    source.path.as_str(),
                    decl.line,
                    pattern,
                )),
                data: json!({
                    "pattern": pattern,
                    "line_text": decl.raw_text.trim(),
                    "source": source.path.as_str(),
                }),
            });
        }
    }
}

fn message_for(rule: PathRule, pattern: &str) -> String {
    match rule {
        PathRule::EmptyParamBeforeSlash => {
            format!("route path '{pattern}' has a parameter marker with no name before '/'")
        }
        PathRule::DoubleColon => {
            format!("route path '{pattern}' contains a doubled parameter marker '::'")
        }
        PathRule::TrailingColon => {
            format!("route path '{pattern}' ends with a bare parameter marker")
        }
        PathRule::EmptyParam => {
            format!("route path '{pattern}' has a parameter marker with no identifier")
        }
    }
}

fn help_for(rule: PathRule) -> &'static str {
    match rule {
        PathRule::EmptyParamBeforeSlash => {
            "Name the parameter (e.g. '/a/:id/b') or drop the colon."
        }
        PathRule::DoubleColon => "Replace '::' with a single named parameter marker.",
        PathRule::TrailingColon => "Name the trailing parameter or remove the dangling colon.",
        PathRule::EmptyParam => "Name the parameter or remove the marker.",
    }
}
