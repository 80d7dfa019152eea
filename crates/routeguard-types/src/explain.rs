//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_ROUTES_PATH_SYNTAX => Some(explain_path_syntax()),

        // Codes
        ids::CODE_EMPTY_PARAM_BEFORE_SLASH => Some(explain_empty_param_before_slash()),
        ids::CODE_DOUBLE_COLON => Some(explain_double_colon()),
        ids::CODE_TRAILING_COLON => Some(explain_trailing_colon()),
        ids::CODE_EMPTY_PARAM => Some(explain_empty_param()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_ROUTES_PATH_SYNTAX]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_EMPTY_PARAM_BEFORE_SLASH,
        ids::CODE_DOUBLE_COLON,
        ids::CODE_TRAILING_COLON,
        ids::CODE_EMPTY_PARAM,
    ]
}

// --- Check-level explanations ---

fn explain_path_syntax() -> Explanation {
    Explanation {
        title: "Route Path Parameter Syntax",
        description: "\
Detects route path patterns whose `:param` markers are malformed: a colon with
no parameter name before the next separator, a doubled colon, or a trailing
colon at the end of the pattern.

Malformed parameter markers are problematic because:
- Express registers the route without error, then never matches the intended requests
- the broken segment silently captures the wrong part of the URL
- the defect only surfaces at request time, far from the declaration

Detection is lexical: the scanner looks at route-registration lines as text,
so a commented-out declaration is still reported. Treat such findings as a
prompt to delete the dead line.",
        remediation: "\
Give every `:` parameter marker a name, and remove markers that have none:
- `/users/:/posts` -> `/users/:userId/posts`
- `/users/:id/:` -> `/users/:id` (or name the second parameter)
- `/a::b` -> `/a/:b` (or remove the stray colon)",
        examples: ExamplePair {
            before: "router.get('/users/:/posts', handler)",
            after: "router.get('/users/:userId/posts', handler)",
        },
    }
}

// --- Code-level explanations ---

fn explain_empty_param_before_slash() -> Explanation {
    Explanation {
        title: "Empty Parameter Before Slash",
        description: "\
The pattern contains `:/` — a parameter marker immediately followed by a path
separator, so the parameter has no name. Express treats the empty name as a
literal and the route never matches the URLs the author intended.",
        remediation: "\
Name the parameter, or drop the colon if the segment is meant to be literal.",
        examples: ExamplePair {
            before: "router.get('/a/:/b', handler)",
            after: "router.get('/a/:id/b', handler)",
        },
    }
}

fn explain_double_colon() -> Explanation {
    Explanation {
        title: "Doubled Parameter Marker",
        description: "\
The pattern contains `::`. The first colon opens a parameter with an empty
name and the second becomes part of the captured text, which is almost always
a typo for a single `:` or a missing `/`.",
        remediation: "\
Replace `::` with a single `:` followed by the parameter name, or insert the
missing `/` between segments.",
        examples: ExamplePair {
            before: "router.post('/a::b', handler)",
            after: "router.post('/a/:b', handler)",
        },
    }
}

fn explain_trailing_colon() -> Explanation {
    Explanation {
        title: "Trailing Parameter Marker",
        description: "\
The pattern ends with `:` — a parameter marker with no name and nothing after
it. The route registers but can never bind the intended parameter.",
        remediation: "\
Name the trailing parameter or remove the dangling colon.",
        examples: ExamplePair {
            before: "router.delete('/users/:id/:', handler)",
            after: "router.delete('/users/:id', handler)",
        },
    }
}

fn explain_empty_param() -> Explanation {
    Explanation {
        title: "Empty Parameter Before Separator",
        description: "\
The pattern contains a colon followed only by whitespace before the next
`,`, `)` or `/` — a parameter marker with no identifier before the next
separator.",
        remediation: "\
Name the parameter, or remove the marker if the separator was intended.",
        examples: ExamplePair {
            before: "router.put('/users/: ', handler)",
            after: "router.put('/users/:id', handler)",
        },
    }
}
