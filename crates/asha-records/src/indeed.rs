//! Job provider backed by the Indeed jobs HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use asha_core::{JobListing, JobSearchParams};

use crate::error::RecordError;
use crate::provider::RecordProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.indeed.com/v2/jobs";

pub struct IndeedJobProvider {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl IndeedJobProvider {
    /// Without an API key every fetch returns no records.
    pub fn new(
        base_url: Option<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RecordError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn query_pairs(params: &JobSearchParams) -> Vec<(&'static str, String)> {
    let limit = params.effective_limit();
    let start = (params.effective_page().saturating_sub(1) as usize) * limit;

    let mut pairs = vec![
        ("q", params.query.clone().unwrap_or_default()),
        ("l", params.location.clone().unwrap_or_default()),
        ("limit", limit.to_string()),
        ("start", start.to_string()),
    ];
    if let Some(arrangement) = &params.work_arrangement {
        let jt = if arrangement == "Remote" {
            "remote".to_string()
        } else {
            arrangement.clone()
        };
        pairs.push(("jt", jt));
    }
    pairs
}

#[derive(Deserialize)]
struct IndeedResponse {
    #[serde(default)]
    results: Vec<IndeedJob>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndeedJob {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    remote: bool,
    #[serde(default)]
    job_type: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
}

impl From<IndeedJob> for JobListing {
    fn from(job: IndeedJob) -> Self {
        JobListing {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            work_arrangement: if job.remote { "Remote" } else { "On-site" }.to_string(),
            job_type: job
                .job_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Full-time".to_string()),
            description: job.description,
            requirements: None,
            salary: None,
            posted_date: job.date,
            application_url: None,
        }
    }
}

#[async_trait]
impl RecordProvider<JobSearchParams> for IndeedJobProvider {
    fn name(&self) -> &str {
        "indeed"
    }

    async fn fetch(&self, query: &JobSearchParams) -> Result<Vec<JobListing>, RecordError> {
        let Some(api_key) = &self.api_key else {
            debug!("indeed api key not set, skipping external fetch");
            return Ok(Vec::new());
        };

        let resp = self
            .http
            .get(&self.base_url)
            .query(&query_pairs(query))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RecordError::Provider(format!(
                "indeed responded with status {}",
                resp.status().as_u16()
            )));
        }

        let data: IndeedResponse = resp
            .json()
            .await
            .map_err(|e| RecordError::Provider(format!("invalid indeed response: {}", e)))?;
        Ok(data.results.into_iter().map(JobListing::from).collect())
    }
}
