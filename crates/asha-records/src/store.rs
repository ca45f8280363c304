//! Per-domain record store: source chain plus local filtering.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::cache::DomainCache;
use crate::error::RecordError;
use crate::filter::DomainQuery;
use crate::provider::RecordProvider;

/// Where a search result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    External,
    FreshCache,
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::External => "external",
            Source::FreshCache => "fresh_cache",
            Source::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources tried in order; the first that yields a collection wins.
const CHAIN: [Source; 3] = [Source::External, Source::FreshCache, Source::Fallback];

#[derive(Debug, Clone)]
pub struct SourceOutcome<R> {
    pub source: Source,
    pub records: Vec<R>,
}

/// Typed search over one domain's records.
#[async_trait]
pub trait RecordSearch<Q: DomainQuery>: Send + Sync {
    /// Search and report which source answered.
    async fn search_with_source(&self, query: &Q)
        -> Result<SourceOutcome<Q::Record>, RecordError>;

    async fn search(&self, query: &Q) -> Result<Vec<Q::Record>, RecordError> {
        Ok(self.search_with_source(query).await?.records)
    }
}

pub struct RecordStore<Q: DomainQuery> {
    provider: Arc<dyn RecordProvider<Q>>,
    cache: DomainCache<Q::Record>,
    fallback: Arc<Vec<Q::Record>>,
}

impl<Q: DomainQuery> RecordStore<Q> {
    pub fn new(
        provider: Arc<dyn RecordProvider<Q>>,
        ttl: Duration,
        fallback: Vec<Q::Record>,
    ) -> Self {
        Self {
            provider,
            cache: DomainCache::new(ttl),
            fallback: Arc::new(fallback),
        }
    }

    pub fn cache(&self) -> &DomainCache<Q::Record> {
        &self.cache
    }

    pub fn fallback(&self) -> &[Q::Record] {
        &self.fallback
    }

    async fn resolve(
        &self,
        source: Source,
        query: &Q,
    ) -> Result<Option<Arc<Vec<Q::Record>>>, RecordError> {
        match source {
            Source::External => match self.provider.fetch(query).await {
                Ok(records) if records.is_empty() => {
                    debug!(
                        domain = Q::DOMAIN,
                        provider = self.provider.name(),
                        "Provider returned no records"
                    );
                    Ok(None)
                }
                Ok(records) => {
                    info!(
                        domain = Q::DOMAIN,
                        provider = self.provider.name(),
                        count = records.len(),
                        "Cache refreshed from provider"
                    );
                    let records = Arc::new(records);
                    self.cache.install(Arc::clone(&records), Instant::now())?;
                    Ok(Some(records))
                }
                Err(e) => {
                    warn!(
                        domain = Q::DOMAIN,
                        provider = self.provider.name(),
                        error = %e,
                        "Provider fetch failed"
                    );
                    Ok(None)
                }
            },
            Source::FreshCache => self.cache.fresh(),
            Source::Fallback => Ok(Some(Arc::clone(&self.fallback))),
        }
    }
}

#[async_trait]
impl<Q: DomainQuery> RecordSearch<Q> for RecordStore<Q> {
    /// Walk the source chain and filter the first collection found.
    ///
    /// Provider failures are absorbed; only a broken cache surfaces as an
    /// error.
    async fn search_with_source(
        &self,
        query: &Q,
    ) -> Result<SourceOutcome<Q::Record>, RecordError> {
        for source in CHAIN {
            if let Some(collection) = self.resolve(source, query).await? {
                let records = query.apply(&collection);
                debug!(
                    domain = Q::DOMAIN,
                    source = %source,
                    candidates = collection.len(),
                    count = records.len(),
                    "Record search resolved"
                );
                return Ok(SourceOutcome { source, records });
            }
        }

        Ok(SourceOutcome {
            source: Source::Fallback,
            records: query.apply(&self.fallback),
        })
    }
}
