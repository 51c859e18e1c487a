// Semaphore API v1 documentation: https://semaphoreci.com/docs/api_v1.html
use chrono::{DateTime, Duration, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::id::BuildNumber;

/// A unit of CI configuration, identified by a stable hash id.
///
/// Timestamps are kept as the opaque strings the wire delivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "Id")]
    pub id: u32,
    pub hash_id: CompactString,
    #[serde(alias = "Name")]
    pub name: CompactString,
    #[serde(default, alias = "Owner")]
    pub owner: CompactString,
    #[serde(default)]
    pub created_at: CompactString,
    #[serde(default)]
    pub updated_at: CompactString,
}

/// Branch identity as listed by the branches endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BriefBranchInfo {
    pub id: u32,
    pub name: CompactString,
    #[serde(default)]
    pub branch_url: CompactString,
}

/// A named line of development within a project, with its most recent
/// build's outcome and timing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub branch_name: CompactString,
    #[serde(default)]
    pub branch_url: CompactString,
    #[serde(default)]
    pub branch_status_url: CompactString,
    #[serde(default)]
    pub branch_history_url: CompactString,
    #[serde(default)]
    pub project_name: CompactString,
    #[serde(default)]
    pub build_url: CompactString,
    #[serde(default)]
    pub build_info_url: CompactString,
    #[serde(default)]
    pub build_number: BuildNumber,
    #[serde(default, alias = "Result")]
    pub result: CompactString,
    #[serde(default)]
    pub started_at: CompactString,
    #[serde(default)]
    pub finished_at: CompactString,
}

/// Commit identity and metadata; all fields are opaque strings, no parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(alias = "Id")]
    pub id: CompactString,
    #[serde(default, alias = "URL")]
    pub url: CompactString,
    #[serde(default)]
    pub author_name: CompactString,
    #[serde(default)]
    pub author_mail: CompactString,
    #[serde(default, alias = "Message")]
    pub message: CompactString,
    #[serde(default, alias = "Timestamp")]
    pub timestamp: CompactString,
}

/// A branch together with its latest commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchStatus {
    #[serde(flatten)]
    pub branch: Branch,
    #[serde(default, alias = "Commit")]
    pub commit: Commit,
}

/// Which page of a multi-page result set is being viewed.
///
/// Delivered in the `pagination` response header, never in the body.
/// Page numbering is 1-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_entries: u32,
    pub total_pages: u32,
    pub per_page: u32,
    pub current_page: u32,
    pub first_page: bool,
    pub last_page: bool,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        !self.last_page
    }
}

/// Branch-level view of one build: URLs, number, result and timing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    #[serde(default)]
    pub build_url: CompactString,
    #[serde(default)]
    pub build_info_url: CompactString,
    #[serde(default)]
    pub build_number: BuildNumber,
    #[serde(default, alias = "Result")]
    pub result: CompactString,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// One execution of a project's CI pipeline, with the triggering commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(flatten)]
    pub summary: BuildSummary,
    #[serde(default, alias = "Commit")]
    pub commit: Commit,
}

impl Build {
    /// Wall-clock time of the build, measured against the current time
    /// while the build is still running.
    pub fn duration(&self) -> Duration {
        match (&self.summary.started_at, &self.summary.finished_at) {
            (Some(begin), Some(end)) => end.signed_duration_since(begin),
            (Some(begin), None) => Utc::now().signed_duration_since(begin),
            _ => Duration::zero(),
        }
    }
}

/// One page of a branch's build history.
///
/// `pagination` is populated from the response header after the body
/// decode, and stays at its default when the header fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchHistory {
    #[serde(flatten)]
    pub branch: Branch,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default, alias = "Builds")]
    pub builds: Vec<Build>,
}

/// Full detail of a single build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub project_name: CompactString,
    #[serde(default)]
    pub branch_name: CompactString,
    #[serde(default, alias = "Number")]
    pub number: BuildNumber,
    #[serde(default, alias = "Result")]
    pub result: CompactString,
    #[serde(default)]
    pub created_at: CompactString,
    #[serde(default)]
    pub updated_at: CompactString,
    #[serde(default)]
    pub started_at: CompactString,
    #[serde(default)]
    pub finished_at: CompactString,
    #[serde(default)]
    pub html_url: CompactString,
    #[serde(default, alias = "Commits")]
    pub commits: Vec<Commit>,
}

/// Captured output of one build, grouped by execution thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildLog {
    #[serde(default, alias = "Threads")]
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub build_info_url: CompactString,
}

/// A parallel execution lane within a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(default, alias = "Number")]
    pub number: u32,
    #[serde(default, alias = "Commands")]
    pub commands: Vec<Command>,
}

/// A single shell command run during a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default, alias = "Name")]
    pub name: CompactString,
    #[serde(default, alias = "Result")]
    pub result: CompactString,
    #[serde(default, alias = "Output")]
    pub output: CompactString,
    #[serde(default, alias = "Duration")]
    pub duration: CompactString,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finish_time: Option<DateTime<Utc>>,
}

impl Command {
    /// Elapsed time between start and finish, when both are known.
    pub fn elapsed(&self) -> Option<Duration> {
        match (&self.start_time, &self.finish_time) {
            (Some(begin), Some(end)) => Some(end.signed_duration_since(begin)),
            _ => None,
        }
    }
}
