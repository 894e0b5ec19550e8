//! Provider-specific URL builders.
//!
//! All builders expect `remote_url` in the canonical form produced by
//! [`normalize_git_url`](super::normalize_git_url) and a path relative to the
//! repository root. Layout differences between providers come from
//! [`HostType::format`].

use super::detection::HostType;
use super::range::LineRange;

/// URL to view a file at a ref (normally a resolved commit hash).
///
/// - GitHub: `{remote}/blob/{ref}/{path}`
/// - GitLab: `{remote}/-/blob/{ref}/{path}`
/// - Bitbucket: `{remote}/src/{ref}/{path}`
#[must_use]
pub fn build_browse_url(
    remote_url: &str,
    host_type: HostType,
    reference: &str,
    relative_path: &str,
) -> String {
    build_view_url(remote_url, host_type.format().blob, reference, relative_path)
}

/// URL to the commit history of a file on a branch.
///
/// - GitHub: `{remote}/commits/{branch}/{path}`
/// - GitLab: `{remote}/-/commits/{branch}/{path}`
/// - Bitbucket: `{remote}/history-node/{branch}/{path}`
#[must_use]
pub fn build_history_url(
    remote_url: &str,
    host_type: HostType,
    branch: &str,
    relative_path: &str,
) -> String {
    build_view_url(remote_url, host_type.format().commits, branch, relative_path)
}

/// URL to the blame (annotate) view of a file at a ref.
///
/// - GitHub: `{remote}/blame/{ref}/{path}`
/// - GitLab: `{remote}/-/blame/{ref}/{path}`
/// - Bitbucket: `{remote}/annotate/{ref}/{path}`
#[must_use]
pub fn build_blame_url(
    remote_url: &str,
    host_type: HostType,
    reference: &str,
    relative_path: &str,
) -> String {
    build_view_url(remote_url, host_type.format().blame, reference, relative_path)
}

/// Browse URL with a line anchor.
///
/// - GitHub: `#L10` / `#L10-L20`
/// - GitLab: `#L10` / `#L10-20`
/// - Bitbucket: `#lines-10` / `#lines-10:20`
#[must_use]
pub fn build_permalink_url(
    remote_url: &str,
    host_type: HostType,
    commit_hash: &str,
    relative_path: &str,
    range: LineRange,
) -> String {
    let base = build_browse_url(remote_url, host_type, commit_hash, relative_path);
    format!("{base}#{}", host_type.format().anchor.render(range))
}

fn build_view_url(remote_url: &str, segment: &str, reference: &str, relative_path: &str) -> String {
    let remote = remote_url.trim_end_matches('/');
    let reference = encode_segments(reference);
    let path = encode_segments(&normalize_relative_path(relative_path));
    format!("{remote}/{segment}/{reference}/{path}")
}

/// Use forward slashes and drop leading slashes so the path can be appended
/// to a URL.
fn normalize_relative_path(relative_path: &str) -> String {
    relative_path.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Percent-encode each `/`-separated segment, keeping the separators.
fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "platforms_tests.rs"]
mod tests;
