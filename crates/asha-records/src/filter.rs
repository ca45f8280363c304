//! Local filter predicates, one per domain.
//!
//! Each parameter type knows which record it filters and how. Supplied
//! fields are AND-ed; absent fields never exclude a record. Filtering is
//! pure: the input slice is never mutated.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use asha_core::{
    Event, EventSearchParams, JobListing, JobSearchParams, MentorshipProgram,
    MentorshipSearchParams,
};

/// A typed search over one record domain.
pub trait DomainQuery: Send + Sync {
    type Record: Clone + Send + Sync + 'static;

    /// Domain name used in logs.
    const DOMAIN: &'static str;

    /// True when `record` satisfies every supplied parameter.
    fn matches(&self, record: &Self::Record) -> bool;

    /// Cap applied after filtering; `None` returns every match.
    fn limit(&self) -> Option<usize> {
        None
    }

    /// Filter `records`, then truncate to [`DomainQuery::limit`].
    fn apply(&self, records: &[Self::Record]) -> Vec<Self::Record> {
        let matched = records.iter().filter(|r| self.matches(r)).cloned();
        match self.limit() {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl DomainQuery for JobSearchParams {
    type Record = JobListing;
    const DOMAIN: &'static str = "jobs";

    fn matches(&self, job: &JobListing) -> bool {
        if let Some(query) = &self.query {
            let text = format!("{} {} {}", job.title, job.company, job.description).to_lowercase();
            if !query
                .to_lowercase()
                .split_whitespace()
                .all(|term| text.contains(term))
            {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !contains_ci(&job.location, location) {
                return false;
            }
        }

        if let Some(arrangement) = &self.work_arrangement {
            if &job.work_arrangement != arrangement {
                return false;
            }
        }

        if let Some(job_type) = &self.job_type {
            if &job.job_type != job_type {
                return false;
            }
        }

        if let Some(stack) = self.tech_stack.as_ref().filter(|s| !s.is_empty()) {
            let description = job.description.to_lowercase();
            if !stack
                .iter()
                .any(|tech| description.contains(&tech.to_lowercase()))
            {
                return false;
            }
        }

        // The record's band must sit inside the requested bounds.
        if let Some(salary) = &job.salary {
            if self.salary_min.is_some_and(|min| salary.min < min) {
                return false;
            }
            if self.salary_max.is_some_and(|max| salary.max > max) {
                return false;
            }
        }

        true
    }

    fn limit(&self) -> Option<usize> {
        Some(self.effective_limit())
    }
}

impl DomainQuery for MentorshipSearchParams {
    type Record = MentorshipProgram;
    const DOMAIN: &'static str = "mentorships";

    fn matches(&self, program: &MentorshipProgram) -> bool {
        if let Some(status) = &self.status {
            if program.status.as_str() != status {
                return false;
            }
        }

        if let Some(duration) = &self.duration {
            if !program.duration.contains(duration.as_str()) {
                return false;
            }
        }

        if let Some(field) = &self.field {
            if !contains_ci(&program.description, field) {
                return false;
            }
        }

        true
    }
}

impl DomainQuery for EventSearchParams {
    type Record = Event;
    const DOMAIN: &'static str = "events";

    fn matches(&self, event: &Event) -> bool {
        if let Some(event_type) = &self.event_type {
            if &event.event_type != event_type {
                return false;
            }
        }

        if let Some(date) = &self.date {
            match (calendar_day(&event.date), calendar_day(date)) {
                (Some(event_day), Some(search_day)) if event_day == search_day => {}
                _ => return false,
            }
        }

        if let Some(location) = &self.location {
            if !contains_ci(&event.location, location) {
                return false;
            }
        }

        true
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Calendar day of a date or timestamp string, ignoring time of day.
///
/// Timestamps with an offset keep the day as written in that offset.
pub fn calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
