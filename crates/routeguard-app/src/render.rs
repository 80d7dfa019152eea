//! Render use cases: plain text, markdown, and GitHub annotations from in-memory reports.

use routeguard_render::RenderableReport;

pub fn render_text(report: &RenderableReport) -> String {
    routeguard_render::render_text(report)
}

pub fn render_markdown(report: &RenderableReport) -> String {
    routeguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    routeguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeguard_render::{
        RenderableData, RenderableFinding, RenderableLocation, RenderableReport,
        RenderableSeverity, RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Warn,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("routes.path_syntax".to_string()),
                    code: "trailing_colon".to_string(),
                    message: "bad route".to_string(),
                    location: Some(RenderableLocation {
                        path: "userRoutes.js".to_string(),
                        line: Some(1),
                        col: None,
                    }),
                    help: None,
                    url: None,
                    excerpt: Some("router.get('/x/:', h)".to_string()),
                    pattern: Some("/x/:".to_string()),
                },
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("routes.path_syntax".to_string()),
                    code: "double_colon".to_string(),
                    message: "bad route".to_string(),
                    location: Some(RenderableLocation {
                        path: "userRoutes.js".to_string(),
                        line: Some(2),
                        col: None,
                    }),
                    help: None,
                    url: None,
                    excerpt: Some("router.get('/y::z', h)".to_string()),
                    pattern: Some("/y::z".to_string()),
                },
            ],
            data: RenderableData {
                findings_emitted: 2,
                findings_total: 2,
                truncated_reason: None,
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        let annotations = render_annotations(&report, 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_text_smoke() {
        let report = sample_report();
        let text = render_text(&report);
        assert!(text.starts_with("ISSUE in userRoutes.js line 1:"));
    }

    #[test]
    fn render_markdown_smoke() {
        let report = sample_report();
        let markdown = render_markdown(&report);
        assert!(!markdown.is_empty());
    }
}
