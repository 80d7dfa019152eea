use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a route finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - source path (scan-relative)
/// - line number
/// - extracted pattern
pub fn fingerprint_for_route(
    check_id: &str,
    code: &str,
    source_path: &str,
    line: u32,
    pattern: &str,
) -> String {
    let line = line.to_string();
    let canonical = [check_id, code, source_path, line.as_str(), pattern].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
