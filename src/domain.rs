//! Hostname normalization and collapsing relative to a root domain.
//!
//! The suffix check is literal string matching on `"." + root`, not a
//! public-suffix-aware DNS comparison.

const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];
const WWW_PREFIX: &str = "www.";

/// Trim and lowercase the root domain supplied on the command line.
pub fn normalize_root(root: &str) -> String {
    root.trim().to_lowercase()
}

/// Strip one scheme prefix and a leading `www.` from a raw hostname.
///
/// Never fails; empty or malformed input comes back as-is (possibly empty)
/// and is dropped later by [`collapse_subdomain`].
pub fn normalize_hostname(raw: &str) -> String {
    let host = raw.trim().to_lowercase();

    // Only the first matching scheme is removed.
    let host = SCHEME_PREFIXES
        .iter()
        .find_map(|scheme| host.strip_prefix(*scheme))
        .unwrap_or(host.as_str());

    host.strip_prefix(WWW_PREFIX).unwrap_or(host).to_string()
}

/// Collapse a normalized hostname to `<label>.<root>`, where `label` is the
/// label directly in front of the root domain.
///
/// Returns `None` for empty hosts, hosts not containing `root`, the root
/// itself, and hosts that contain `root` without ending in `"." + root`.
pub fn collapse_subdomain(host: &str, root: &str) -> Option<String> {
    if host.is_empty() || !host.contains(root) || host == root {
        return None;
    }

    let prefix = host.strip_suffix(root)?.strip_suffix('.')?;
    let label = prefix.rsplit('.').next().unwrap_or(prefix);

    Some(format!("{}.{}", label, root))
}
