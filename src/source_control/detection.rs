//! Hosting provider detection for git remote URLs.

use std::fmt;

use serde::Serialize;

use super::range::LineRange;

/// Hosting providers with a known URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostType {
    GitHub,
    GitLab,
    Bitbucket,
    /// Anything else; links fall back to the GitHub layout.
    Unknown,
}

/// Syntax of the `#...` fragment that highlights lines in a file view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAnchor {
    /// Text placed before the first line number (`L`, `lines-`).
    pub prefix: &'static str,
    /// Text placed between the first and last line number of a range.
    pub range_separator: &'static str,
}

impl LineAnchor {
    /// Render the anchor for `range`, without the leading `#`.
    ///
    /// A range covering a single line always uses the single-line form.
    #[must_use]
    pub fn render(&self, range: LineRange) -> String {
        if range.is_single() {
            format!("{}{}", self.prefix, range.start())
        } else {
            format!(
                "{}{}{}{}",
                self.prefix,
                range.start(),
                self.range_separator,
                range.end()
            )
        }
    }
}

/// Path segments and anchor syntax of one provider's web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFormat {
    /// Segment for viewing a file at a ref.
    pub blob: &'static str,
    /// Segment for the commit history of a file.
    pub commits: &'static str,
    /// Segment for the blame/annotate view.
    pub blame: &'static str,
    pub anchor: LineAnchor,
}

const GITHUB_FORMAT: HostFormat = HostFormat {
    blob: "blob",
    commits: "commits",
    blame: "blame",
    anchor: LineAnchor {
        prefix: "L",
        range_separator: "-L",
    },
};

const GITLAB_FORMAT: HostFormat = HostFormat {
    blob: "-/blob",
    commits: "-/commits",
    blame: "-/blame",
    anchor: LineAnchor {
        prefix: "L",
        range_separator: "-",
    },
};

const BITBUCKET_FORMAT: HostFormat = HostFormat {
    blob: "src",
    commits: "history-node",
    blame: "annotate",
    anchor: LineAnchor {
        prefix: "lines-",
        range_separator: ":",
    },
};

impl HostType {
    /// Human-readable name for the provider.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Bitbucket => "Bitbucket",
            Self::Unknown => "Unknown",
        }
    }

    /// Canonical domain of the hosted service, if the provider is known.
    #[must_use]
    pub fn domain(self) -> Option<&'static str> {
        match self {
            Self::GitHub => Some("github.com"),
            Self::GitLab => Some("gitlab.com"),
            Self::Bitbucket => Some("bitbucket.org"),
            Self::Unknown => None,
        }
    }

    /// URL layout used when building links for this provider.
    ///
    /// Unknown hosts use the GitHub layout, which most self-hosted forges mimic.
    #[must_use]
    pub fn format(self) -> &'static HostFormat {
        match self {
            Self::GitLab => &GITLAB_FORMAT,
            Self::Bitbucket => &BITBUCKET_FORMAT,
            Self::GitHub | Self::Unknown => &GITHUB_FORMAT,
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect which hosting provider a remote URL belongs to.
///
/// Matching is a case-sensitive substring search. Exact domains win over the
/// generic `gitlab` / `bitbucket` substrings used to spot self-hosted instances.
#[must_use]
pub fn detect_host_type(url: &str) -> HostType {
    if url.contains("github.com") {
        HostType::GitHub
    } else if url.contains("gitlab.com") {
        HostType::GitLab
    } else if url.contains("bitbucket.org") {
        HostType::Bitbucket
    } else if url.contains("gitlab") {
        HostType::GitLab
    } else if url.contains("bitbucket") {
        HostType::Bitbucket
    } else {
        HostType::Unknown
    }
}

#[cfg(test)]
#[path = "detection_tests.rs"]
mod tests;
