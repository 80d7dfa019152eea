//! Filesystem adapters: discover route sources and build the route table model.
//!
//! This crate is allowed to do filesystem IO. Rule evaluation is pure and
//! lives in `routeguard-domain`; this crate only turns a directory of route
//! files into the in-memory model the engine consumes.

#![forbid(unsafe_code)]

mod discover;
mod extract;

use camino::Utf8Path;
use rayon::prelude::*;
use routeguard_domain::model::{RouteSourceModel, RouteTableModel};
use routeguard_domain::policy::ScanPolicy;
use routeguard_types::SourcePath;
use thiserror::Error;

pub use discover::discover_sources;
pub use extract::{is_candidate, scan_source_text, LexicalExtractor, PatternExtractor};

/// IO failures while scanning. There is no per-source recovery: the first
/// unreadable source aborts the whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unreadable routes directory {path}")]
    RootUnreadable {
        path: SourcePath,
        #[source]
        source: std::io::Error,
    },
    #[error("unreadable source {path}")]
    SourceUnreadable {
        path: SourcePath,
        #[source]
        source: std::io::Error,
    },
}

/// Build the in-memory route table model used by the rule engine.
///
/// Sources are read and scanned in parallel, but results are collected
/// positionally, so the model is identical to a sequential scan in discovery
/// order.
pub fn build_route_table_model(
    root: &Utf8Path,
    scan: &ScanPolicy,
) -> Result<RouteTableModel, ScanError> {
    let routes_root = root.join(&scan.routes_dir);
    let sources = discover::discover_sources(&routes_root, &scan.file_suffix)?;

    let scanned: Vec<RouteSourceModel> = sources
        .par_iter()
        .map(|rel| {
            let abs = routes_root.join(rel.as_str());
            let text =
                std::fs::read_to_string(&abs).map_err(|err| ScanError::SourceUnreadable {
                    path: rel.clone(),
                    source: err,
                })?;
            let (lines_scanned, declarations) =
                extract::scan_source_text(&text, scan, &LexicalExtractor);
            Ok(RouteSourceModel {
                path: rel.clone(),
                lines_scanned,
                declarations,
            })
        })
        .collect::<Result<Vec<_>, ScanError>>()?;

    Ok(RouteTableModel {
        scan_root: SourcePath::from(routes_root),
        sources: scanned,
    })
}
