use crate::ScanError;
use camino::{Utf8Path, Utf8PathBuf};
use routeguard_types::SourcePath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Enumerate route sources directly inside `routes_root`.
///
/// Behavior mirrors the reference tool:
/// - non-recursive (files in subdirectories are not scanned)
/// - only regular files whose name ends with `file_suffix`
/// - sorted by path, so the scan order is stable for one run
pub fn discover_sources(
    routes_root: &Utf8Path,
    file_suffix: &str,
) -> Result<Vec<SourcePath>, ScanError> {
    let mut out: Vec<SourcePath> = Vec::new();

    for entry in WalkDir::new(routes_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| ScanError::RootUnreadable {
            path: SourcePath::from(routes_root),
            source: err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            continue;
        };
        let rel = abs
            .strip_prefix(routes_root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        if rel.ends_with(file_suffix) {
            out.push(SourcePath::new(&rel));
        }
    }

    out.sort();
    out.dedup();

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
