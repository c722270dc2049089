use std::fmt;
use std::str::FromStr;

use crate::error::GuppyError;

/// Script installed under every hook name. Git picks the event from the
/// file name, so one dispatcher serves all of them.
pub const TEMPLATE: &str = include_str!("../scripts/hookfile");

/// Suffix appended to a pre-existing hook when it is moved aside.
pub const BACKUP_SUFFIX: &str = ".guppy";

/// The git hooks guppy knows how to install, in installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    ApplypatchMsg,
    CommitMsg,
    PostApplypatch,
    PostCheckout,
    PostCommit,
    PostMerge,
    PostReceive,
    PostRewrite,
    PostUpdate,
    PreApplypatch,
    PreAutoGc,
    PreCommit,
    PrePush,
    PreRebase,
    PreReceive,
    PrepareCommitMsg,
    Update,
}

impl HookName {
    pub const ALL: [HookName; 17] = [
        HookName::ApplypatchMsg,
        HookName::CommitMsg,
        HookName::PostApplypatch,
        HookName::PostCheckout,
        HookName::PostCommit,
        HookName::PostMerge,
        HookName::PostReceive,
        HookName::PostRewrite,
        HookName::PostUpdate,
        HookName::PreApplypatch,
        HookName::PreAutoGc,
        HookName::PreCommit,
        HookName::PrePush,
        HookName::PreRebase,
        HookName::PreReceive,
        HookName::PrepareCommitMsg,
        HookName::Update,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookName::ApplypatchMsg => "applypatch-msg",
            HookName::CommitMsg => "commit-msg",
            HookName::PostApplypatch => "post-applypatch",
            HookName::PostCheckout => "post-checkout",
            HookName::PostCommit => "post-commit",
            HookName::PostMerge => "post-merge",
            HookName::PostReceive => "post-receive",
            HookName::PostRewrite => "post-rewrite",
            HookName::PostUpdate => "post-update",
            HookName::PreApplypatch => "pre-applypatch",
            HookName::PreAutoGc => "pre-auto-gc",
            HookName::PreCommit => "pre-commit",
            HookName::PrePush => "pre-push",
            HookName::PreRebase => "pre-rebase",
            HookName::PreReceive => "pre-receive",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
            HookName::Update => "update",
        }
    }

    /// File name used for the backup of an existing hook
    pub fn backup_file_name(self) -> String {
        format!("{}{}", self.as_str(), BACKUP_SUFFIX)
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = GuppyError;

    /// Exact match only: "commit" or "pre-commi" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .iter()
            .copied()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| GuppyError::InvalidHookName(s.to_string()))
    }
}

/// Text printed by `guppy --hooks`: five names per line.
pub fn listing() -> String {
    let lines: Vec<String> = HookName::ALL
        .chunks(5)
        .map(|chunk| {
            chunk
                .iter()
                .map(|hook| hook.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    format!("Available git-hooks are:\n  {}", lines.join(",\n  "))
}
