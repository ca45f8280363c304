//! Record stores for jobs, mentorship programs and events.
//!
//! A [`RecordStore`] answers a typed query by walking an ordered chain of
//! sources (external provider, fresh cache, static fallback) and applying
//! the domain's local filter to whichever collection answered first.

pub mod cache;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod indeed;
pub mod provider;
pub mod store;

pub use cache::DomainCache;
pub use error::RecordError;
pub use filter::{calendar_day, DomainQuery};
pub use indeed::IndeedJobProvider;
pub use provider::{EmptyProvider, RecordProvider, StaticProvider};
pub use store::{RecordSearch, RecordStore, Source, SourceOutcome};

use std::sync::Arc;
use std::time::Duration;

use asha_core::config::{CacheConfig, ProvidersConfig};
use asha_core::{EventSearchParams, JobSearchParams, MentorshipSearchParams};

pub type JobStore = dyn RecordSearch<JobSearchParams>;
pub type MentorshipStore = dyn RecordSearch<MentorshipSearchParams>;
pub type EventStore = dyn RecordSearch<EventSearchParams>;

/// Request timeout for external record providers.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(15);

/// The three domain stores, shared between the chat pipeline and the
/// search endpoints.
#[derive(Clone)]
pub struct RecordStores {
    pub jobs: Arc<JobStore>,
    pub mentorships: Arc<MentorshipStore>,
    pub events: Arc<EventStore>,
}

impl RecordStores {
    /// Stores wired from configuration. Mentorships and events have no
    /// external integration and always serve the fallback dataset.
    pub fn from_config(
        cache: &CacheConfig,
        providers: &ProvidersConfig,
    ) -> Result<Self, RecordError> {
        let job_provider: Arc<dyn RecordProvider<JobSearchParams>> = if providers.jobs.enabled {
            let base_url = (!providers.jobs.base_url.trim().is_empty())
                .then(|| providers.jobs.base_url.clone());
            let provider = IndeedJobProvider::new(
                base_url,
                providers.jobs.resolved_api_key(),
                PROVIDER_TIMEOUT,
            )?;
            if !provider.has_key() {
                tracing::info!(
                    env = %providers.jobs.api_key_env,
                    "No job provider key set; job searches use the fallback dataset"
                );
            }
            Arc::new(provider)
        } else {
            Arc::new(EmptyProvider)
        };

        Ok(Self {
            jobs: Arc::new(RecordStore::<JobSearchParams>::new(
                job_provider,
                Duration::from_secs(cache.jobs_ttl_secs),
                fallback::jobs(),
            )),
            mentorships: Arc::new(RecordStore::<MentorshipSearchParams>::new(
                Arc::new(EmptyProvider),
                Duration::from_secs(cache.mentorships_ttl_secs),
                fallback::mentorships(),
            )),
            events: Arc::new(RecordStore::<EventSearchParams>::new(
                Arc::new(EmptyProvider),
                Duration::from_secs(cache.events_ttl_secs),
                fallback::events(),
            )),
        })
    }

    /// Stores that never leave the process: empty providers over the
    /// fallback dataset.
    pub fn offline(cache: &CacheConfig) -> Self {
        Self {
            jobs: Arc::new(RecordStore::<JobSearchParams>::new(
                Arc::new(EmptyProvider),
                Duration::from_secs(cache.jobs_ttl_secs),
                fallback::jobs(),
            )),
            mentorships: Arc::new(RecordStore::<MentorshipSearchParams>::new(
                Arc::new(EmptyProvider),
                Duration::from_secs(cache.mentorships_ttl_secs),
                fallback::mentorships(),
            )),
            events: Arc::new(RecordStore::<EventSearchParams>::new(
                Arc::new(EmptyProvider),
                Duration::from_secs(cache.events_ttl_secs),
                fallback::events(),
            )),
        }
    }
}
