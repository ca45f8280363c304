//! External record providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RecordError;
use crate::filter::DomainQuery;

/// A source of whole records for one domain.
///
/// An empty result means "no data"; callers treat it the same as an
/// unreachable provider.
#[async_trait]
pub trait RecordProvider<Q: DomainQuery>: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, query: &Q) -> Result<Vec<Q::Record>, RecordError>;
}

/// Provider for domains without an external integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyProvider;

#[async_trait]
impl<Q: DomainQuery> RecordProvider<Q> for EmptyProvider {
    fn name(&self) -> &str {
        "empty"
    }

    async fn fetch(&self, _query: &Q) -> Result<Vec<Q::Record>, RecordError> {
        Ok(Vec::new())
    }
}

/// In-memory provider with a swappable outcome. Counts fetches.
pub struct StaticProvider<R> {
    outcome: Mutex<Option<Vec<R>>>,
    calls: AtomicUsize,
}

impl<R: Clone> StaticProvider<R> {
    pub fn returning(records: Vec<R>) -> Self {
        Self {
            outcome: Mutex::new(Some(records)),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose every fetch errors.
    pub fn failing() -> Self {
        Self {
            outcome: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_records(&self, records: Vec<R>) {
        if let Ok(mut outcome) = self.outcome.lock() {
            *outcome = Some(records);
        }
    }

    pub fn set_failing(&self) {
        if let Ok(mut outcome) = self.outcome.lock() {
            *outcome = None;
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<Q: DomainQuery> RecordProvider<Q> for StaticProvider<Q::Record> {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _query: &Q) -> Result<Vec<Q::Record>, RecordError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .outcome
            .lock()
            .map_err(|e| RecordError::Provider(format!("static provider lock poisoned: {}", e)))?;
        match outcome.as_ref() {
            Some(records) => Ok(records.clone()),
            None => Err(RecordError::Provider("static provider set to fail".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asha_core::{EventSearchParams, JobSearchParams};

    #[tokio::test]
    async fn test_empty_provider_yields_nothing() {
        let provider = EmptyProvider;
        let events =
            RecordProvider::<EventSearchParams>::fetch(&provider, &EventSearchParams::default())
                .await
                .unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_static_provider_switches_outcome() {
        let provider = StaticProvider::returning(crate::fallback::jobs());
        let query = JobSearchParams::default();

        assert_eq!(provider.fetch(&query).await.unwrap().len(), 5);
        provider.set_failing();
        assert!(provider.fetch(&query).await.is_err());
        provider.set_records(Vec::new());
        assert!(provider.fetch(&query).await.unwrap().is_empty());
        assert_eq!(provider.calls(), 3);
    }
}
