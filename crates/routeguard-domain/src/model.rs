use routeguard_types::SourcePath;

/// All route sources in scope for one scan, in discovery order.
///
/// Source order is load-bearing: findings are reported in (source, line)
/// order, with "source order" meaning the order of `sources` here.
#[derive(Clone, Debug, Default)]
pub struct RouteTableModel {
    pub scan_root: SourcePath,
    pub sources: Vec<RouteSourceModel>,
}

#[derive(Clone, Debug, Default)]
pub struct RouteSourceModel {
    pub path: SourcePath,
    pub lines_scanned: u32,
    pub declarations: Vec<RouteDeclaration>,
}

/// One candidate route-registration line.
#[derive(Clone, Debug)]
pub struct RouteDeclaration {
    /// 1-based line number within the source.
    pub line: u32,
    /// The physical line as read, untrimmed.
    pub raw_text: String,
    /// First quoted string literal on the line, if any. A candidate with no
    /// quoted literal cannot be classified and never produces a finding.
    pub pattern: Option<String>,
}

impl RouteSourceModel {
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }
}

impl RouteTableModel {
    pub fn total_declarations(&self) -> usize {
        self.sources.iter().map(|s| s.declarations.len()).sum()
    }
}
