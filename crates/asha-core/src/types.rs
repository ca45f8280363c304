//! Domain records, per-domain search parameters and chat turns.
//!
//! Wire names follow the JSON shape consumed by the chat client
//! (`camelCase`), so every struct here can be returned from the API as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_lenient;

// =============================================================================
// Records
// =============================================================================

/// Salary band attached to a job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// A job listing, either from an external provider or the fallback dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// `Remote`, `Hybrid` or `On-site`.
    pub work_arrangement: String,
    /// `Full-time`, `Part-time` or `Contract`.
    pub job_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    pub posted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

/// Enrollment state of a mentorship program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentorshipStatus {
    #[serde(rename = "Applications Open")]
    ApplicationsOpen,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    #[serde(rename = "Closed")]
    Closed,
}

impl MentorshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentorshipStatus::ApplicationsOpen => "Applications Open",
            MentorshipStatus::ComingSoon => "Coming Soon",
            MentorshipStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for MentorshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speaker or mentor named on a program or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipProgram {
    pub id: String,
    pub title: String,
    pub status: MentorshipStatus,
    pub start_date: String,
    /// Free-form, e.g. `3 months`.
    pub duration: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

/// A career event (workshop, seminar, conference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    /// Calendar date, `YYYY-MM-DD` or a full timestamp.
    pub date: String,
    pub time: String,
    /// Venue, or `Online`.
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

// =============================================================================
// Search parameters
// =============================================================================

/// Default number of job results returned after filtering.
pub const DEFAULT_JOB_LIMIT: usize = 10;

/// Job search parameters. Every field is optional; a record must satisfy
/// each one that is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobSearchParams {
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub work_arrangement: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string_list", skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(deserialize_with = "serde_lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(deserialize_with = "serde_lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(deserialize_with = "serde_lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl JobSearchParams {
    /// True when no field is set, i.e. the jobs domain should not be queried.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Result cap applied after filtering.
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            Some(0) | None => DEFAULT_JOB_LIMIT,
            Some(n) => n as usize,
        }
    }

    /// 1-based page, forwarded to external providers only.
    pub fn effective_page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MentorshipSearchParams {
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl MentorshipSearchParams {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventSearchParams {
    #[serde(
        rename = "type",
        deserialize_with = "serde_lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "serde_lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EventSearchParams {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// =============================================================================
// Chat turns
// =============================================================================

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable entry in a session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
