use serde::{Deserialize, Serialize};

use asha_core::{
    Event, EventSearchParams, JobListing, JobSearchParams, MentorshipProgram,
    MentorshipSearchParams,
};

/// Structured reading of one user message.
///
/// A domain whose parameters are absent is not queried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntentResult {
    pub job_search_params: Option<JobSearchParams>,
    pub mentorship_params: Option<MentorshipSearchParams>,
    pub events_params: Option<EventSearchParams>,
    #[serde(deserialize_with = "asha_core::serde_lenient::flag")]
    pub has_bias: bool,
}

impl IntentResult {
    /// No domain parameters, no bias.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Drop parameter bags with no field set.
    pub fn normalized(mut self) -> Self {
        self.job_search_params = self.job_search_params.filter(|p| !p.is_empty());
        self.mentorship_params = self.mentorship_params.filter(|p| !p.is_empty());
        self.events_params = self.events_params.filter(|p| !p.is_empty());
        self
    }

    pub fn has_lookups(&self) -> bool {
        self.job_search_params.is_some()
            || self.mentorship_params.is_some()
            || self.events_params.is_some()
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Assistant reply plus any record attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobListing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentorships: Option<Vec<MentorshipProgram>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_parses_nulls_and_extra_fields() {
        let raw = r#"{
            "jobSearchParams": {"location": "Mumbai", "salaryMin": null, "techStack": []},
            "mentorshipParams": null,
            "eventsParams": {"type": null, "date": "", "location": "null"},
            "hasBias": false,
            "isJobSearch": true
        }"#;
        let intent: IntentResult = serde_json::from_str::<IntentResult>(raw)
            .unwrap()
            .normalized();

        let jobs = intent.job_search_params.as_ref().unwrap();
        assert_eq!(jobs.location.as_deref(), Some("Mumbai"));
        assert!(jobs.tech_stack.is_none());
        assert!(intent.mentorship_params.is_none());
        assert!(intent.events_params.is_none());
        assert!(!intent.has_bias);
    }

    #[test]
    fn test_intent_missing_bias_defaults_false() {
        let intent: IntentResult = serde_json::from_str("{}").unwrap();
        assert_eq!(intent, IntentResult::neutral());
        assert!(!intent.has_lookups());
    }

    #[test]
    fn test_chat_request_session_optional() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(req.session_id.is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","sessionId":"abc"}"#).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_chat_response_omits_absent_attachments() {
        let resp = ChatResponse {
            message: "Hello".to_string(),
            session_id: "s1".to_string(),
            jobs: Some(Vec::new()),
            mentorships: None,
            events: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["sessionId"], "s1");
        assert!(json["jobs"].as_array().unwrap().is_empty());
        assert!(json.get("mentorships").is_none());
        assert!(json.get("events").is_none());
    }
}
