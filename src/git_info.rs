//! Git metadata for the footer banner and the info page.
//!
//! Collected once at startup by shelling out to git. Every value
//! degrades to `-` when the working copy is not a git checkout.

use std::process::Command;
use std::sync::OnceLock;

/// Branch the deployed site tracks.
pub const BRANCH: &str = "bean";

const SOURCE_URL: &str = "https://github.com/beantheory/beantheory/tree/";
const CHANGESET_URL: &str = "https://github.com/beantheory/beantheory/commits/";

/// Snapshot of the checkout the server was started from.
#[derive(Debug, Clone)]
pub struct GitInfo {
    /// Commit hash of HEAD.
    pub rev: String,
    /// Commit date of HEAD.
    pub date: String,
    /// Multi-command summary shown on the info page.
    pub summary: String,
}

static CACHED: OnceLock<GitInfo> = OnceLock::new();

impl GitInfo {
    /// The snapshot collected on first use, shared process-wide.
    pub fn cached() -> &'static GitInfo {
        CACHED.get_or_init(GitInfo::collect)
    }

    /// Run the git commands and capture their output.
    pub fn collect() -> Self {
        Self::try_collect().unwrap_or_else(|| Self {
            rev: "-".to_string(),
            date: "-".to_string(),
            summary: "-".to_string(),
        })
    }

    fn try_collect() -> Option<Self> {
        let commands: [&[&str]; 5] = [
            &["rev-parse", "HEAD"],
            &["show", "--format=%ci", "-s", "HEAD"],
            &["branch", "--contains", "HEAD"],
            &["reflog", "-n5"],
            &["log", "--graph", "-n", "10"],
        ];

        let mut outputs = Vec::with_capacity(commands.len());
        for args in commands {
            let output = Command::new("git").args(args).output().ok()?;
            if !output.status.success() {
                return None;
            }
            outputs.push(String::from_utf8_lossy(&output.stdout).trim_end().to_string());
        }

        let summary = commands
            .iter()
            .zip(&outputs)
            .map(|(args, out)| format!("$ git {}\n{}", args.join(" "), out))
            .collect::<Vec<_>>()
            .join("\n");

        Some(Self {
            rev: outputs[0].clone(),
            date: outputs[1].clone(),
            summary,
        })
    }

    /// Anchor linking to the source tree at the running revision.
    pub fn source_link(&self) -> String {
        format!(r#"<a href="{}{}">Source</a>"#, SOURCE_URL, self.rev)
    }

    /// Anchor linking to the branch changelog, labelled with the commit date.
    pub fn changeset_link(&self) -> String {
        format!(r#"<a href="{}{}">{}</a>"#, CHANGESET_URL, BRANCH, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_link_points_at_revision() {
        let info = GitInfo {
            rev: "abc123".to_string(),
            date: "2020-05-01 12:00:00 +0000".to_string(),
            summary: String::new(),
        };
        assert!(info.source_link().contains("/tree/abc123"));
        assert!(info.changeset_link().contains("/commits/bean"));
        assert!(info.changeset_link().contains("2020-05-01"));
    }

    #[test]
    fn test_collect_never_panics() {
        // Whatever the environment looks like, collection must produce
        // printable values.
        let info = GitInfo::collect();
        assert!(!info.rev.is_empty());
        assert!(!info.summary.is_empty());
    }
}
