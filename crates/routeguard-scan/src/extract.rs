use once_cell::sync::Lazy;
use regex::Regex;
use routeguard_domain::model::RouteDeclaration;
use routeguard_domain::policy::ScanPolicy;

/// First quoted string literal on a line, single- or double-quoted.
///
/// This is the reference heuristic, kept as-is: the capture is the run of
/// characters after the first quote that contains neither quote character.
/// There is no escape handling and no requirement that the quote is closed.
static FIRST_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']([^"']*)"#).expect("static pattern must compile"));

/// Extracts a declared route path pattern from a candidate line.
///
/// Implementations are lexical today; the trait is the seam where a stricter
/// parser could be substituted without touching rule evaluation.
pub trait PatternExtractor {
    fn extract(&self, line: &str) -> Option<String>;
}

/// The reference extractor: the first quoted run on the line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalExtractor;

impl PatternExtractor for LexicalExtractor {
    fn extract(&self, line: &str) -> Option<String> {
        FIRST_QUOTED
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// A line is a candidate when it contains the router marker AND at least one
/// HTTP-method call marker as literal substrings.
///
/// No comment stripping: a commented-out registration is still a candidate.
pub fn is_candidate(line: &str, scan: &ScanPolicy) -> bool {
    line.contains(&scan.router_marker)
        && scan
            .method_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
}

/// Scan one source's text into candidate declarations.
///
/// Returns the number of lines scanned and the declarations found, in
/// ascending line order (1-based numbering).
pub fn scan_source_text(
    text: &str,
    scan: &ScanPolicy,
    extractor: &dyn PatternExtractor,
) -> (u32, Vec<RouteDeclaration>) {
    let mut declarations = Vec::new();
    let mut lines_scanned: u32 = 0;

    for (idx, line) in text.lines().enumerate() {
        lines_scanned += 1;
        if !is_candidate(line, scan) {
            continue;
        }
        declarations.push(RouteDeclaration {
            line: (idx + 1) as u32,
            raw_text: line.to_string(),
            pattern: extractor.extract(line),
        });
    }

    (lines_scanned, declarations)
}
