//! Route handler functions for all API endpoints.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use asha_chat::{ChatRequest, ChatResponse};
use asha_core::serde_lenient::split_list;
use asha_core::{
    Event, EventSearchParams, JobListing, JobSearchParams, MentorshipProgram,
    MentorshipSearchParams,
};

use asha_records::RecordSearch;

use crate::error::ApiError;
use crate::state::AppState;

type RawQuery = HashMap<String, String>;

// =============================================================================
// Query parameter parsing
// =============================================================================

/// Trimmed, non-blank text parameter.
fn text(query: &RawQuery, name: &str) -> Option<String> {
    query
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Numeric parameter. Blank counts as absent; anything else must parse.
fn number<T: FromStr>(query: &RawQuery, name: &str) -> Result<Option<T>, ApiError> {
    match text(query, name) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ApiError::InvalidParameter {
                name: name.to_string(),
                value: raw,
            }),
    }
}

pub fn job_params(query: &RawQuery) -> Result<JobSearchParams, ApiError> {
    let tech_stack = text(query, "techStack")
        .map(|raw| split_list(&raw))
        .filter(|list| !list.is_empty());

    Ok(JobSearchParams {
        query: text(query, "query"),
        location: text(query, "location"),
        work_arrangement: text(query, "workArrangement"),
        job_type: text(query, "jobType"),
        tech_stack,
        experience_level: text(query, "experienceLevel"),
        salary_min: number::<f64>(query, "salaryMin")?.filter(|v| v.is_finite()),
        salary_max: number::<f64>(query, "salaryMax")?.filter(|v| v.is_finite()),
        page: number(query, "page")?,
        limit: number(query, "limit")?,
    })
}

pub fn mentorship_params(query: &RawQuery) -> MentorshipSearchParams {
    MentorshipSearchParams {
        status: text(query, "status"),
        duration: text(query, "duration"),
        field: text(query, "field"),
    }
}

pub fn event_params(query: &RawQuery) -> EventSearchParams {
    EventSearchParams {
        event_type: text(query, "type"),
        date: text(query, "date"),
        location: text(query, "location"),
    }
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub sessions: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/chat - run one message through the chat pipeline.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let response = state
        .orchestrator
        .handle_message(&request.message, request.session_id.as_deref())
        .await?;

    tracing::info!(
        session_id = %response.session_id,
        jobs = response.jobs.as_ref().map(Vec::len),
        mentorships = response.mentorships.as_ref().map(Vec::len),
        events = response.events.as_ref().map(Vec::len),
        "Chat message handled"
    );
    Ok(Json(response))
}

/// GET /api/jobs
pub async fn jobs(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    let params = job_params(&query)?;
    Ok(Json(state.stores.jobs.search(&params).await?))
}

/// GET /api/mentorships
pub async fn mentorships(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> Result<Json<Vec<MentorshipProgram>>, ApiError> {
    let params = mentorship_params(&query);
    Ok(Json(state.stores.mentorships.search(&params).await?))
}

/// GET /api/events
pub async fn events(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let params = event_params(&query);
    Ok(Json(state.stores.events.search(&params).await?))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        sessions: state.orchestrator.sessions().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_job_params_full() {
        let params = job_params(&raw(&[
            ("query", "frontend developer"),
            ("techStack", "React, CSS ,"),
            ("salaryMin", "1200000"),
            ("limit", "3"),
            ("page", "2"),
            ("location", "  "),
        ]))
        .unwrap();

        assert_eq!(params.query.as_deref(), Some("frontend developer"));
        assert_eq!(
            params.tech_stack,
            Some(vec!["React".to_string(), "CSS".to_string()])
        );
        assert_eq!(params.salary_min, Some(1_200_000.0));
        assert_eq!(params.limit, Some(3));
        assert_eq!(params.page, Some(2));
        assert!(params.location.is_none());
    }

    #[test]
    fn test_job_params_bad_number() {
        let err = job_params(&raw(&[("limit", "ten")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { ref name, .. } if name == "limit"));

        let err = job_params(&raw(&[("salaryMax", "-")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { ref name, .. } if name == "salaryMax"));
    }

    #[test]
    fn test_event_params_type_key() {
        let params = event_params(&raw(&[("type", "Workshop"), ("date", "2023-08-10")]));
        assert_eq!(params.event_type.as_deref(), Some("Workshop"));
        assert_eq!(params.date.as_deref(), Some("2023-08-10"));
        assert!(params.location.is_none());
    }
}
