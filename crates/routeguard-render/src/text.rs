use crate::RenderableReport;

/// Render findings in the plain diagnostic format the tool prints to stdout.
///
/// Per finding:
///
/// ```text
/// ISSUE in userRoutes.js line 12:
///   router.get('/users/:', handler)
///   Route path: "/users/:"
/// ```
///
/// with a blank line after each issue. A clean report renders as the empty
/// string: silence means no problems found.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for f in &report.findings {
        let (path, line) = match &f.location {
            Some(loc) => (loc.path.as_str(), loc.line.unwrap_or(0)),
            None => ("?", 0),
        };
        let excerpt = f.excerpt.as_deref().unwrap_or(f.message.as_str());
        let pattern = f.pattern.as_deref().unwrap_or("");

        out.push_str(&format!("ISSUE in {} line {}:\n", path, line));
        out.push_str(&format!("  {}\n", excerpt));
        out.push_str(&format!("  Route path: \"{}\"\n", pattern));
        out.push('\n');
    }

    out
}
