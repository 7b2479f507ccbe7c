//! Decode entry point: grammar engine, transform, optional merge, memoised.


use crate::Result;
use crate::classify::transform;
use crate::error::DecodeResult;
use crate::grammar::{GrammarEngine, default_parser};
use crate::merge::merge;
use crate::model::SpectralClassification;
use crate::reference::{LookupTree, default_lookup};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type CacheKey = (String, bool);

/// Unparseable input is cached as `None`.
type Cache = HashMap<CacheKey, Option<Arc<SpectralClassification>>>;

pub struct Classifier {
    engine: Box<dyn GrammarEngine + Send + Sync>,
    lookup: LookupTree,
    cache: Mutex<Cache>,
    cache_limit: Option<usize>,
}

impl Classifier {
    pub fn new(engine: impl GrammarEngine + Send + Sync + 'static, lookup: LookupTree) -> Self {
        Self {
            engine: Box::new(engine),
            lookup,
            cache: Mutex::new(Cache::new()),
            cache_limit: None,
        }
    }

    /// Embedded grammar and reference table.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(default_parser()?, default_lookup()?))
    }

    /// Once `limit` entries are cached, further results are computed but not
    /// stored. Existing entries are never evicted.
    pub fn with_cache_limit(mut self, limit: Option<usize>) -> Self {
        self.cache_limit = limit;
        self
    }

    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    /// `Ok(None)` when the grammar does not consume the whole text.
    /// `augment` attaches averaged reference properties as `data`.
    pub fn decode(
        &self,
        text: &str,
        augment: bool,
    ) -> DecodeResult<Option<Arc<SpectralClassification>>> {
        let key = (text.to_string(), augment);
        if let Some(hit) = self.cache().get(&key) {
            return Ok(hit.clone());
        }

        // Contract violations return here and are never cached.
        let result = self.decode_uncached(text, augment)?.map(Arc::new);

        let mut cache = self.cache();
        if self.cache_limit.is_none_or(|limit| cache.len() < limit) {
            cache.entry(key).or_insert_with(|| result.clone());
        }
        Ok(result)
    }

    fn decode_uncached(
        &self,
        text: &str,
        augment: bool,
    ) -> DecodeResult<Option<SpectralClassification>> {
        let Some(outcome) = self.engine.parse(text) else {
            return Ok(None);
        };
        if !outcome.remainder.is_empty() {
            return Ok(None);
        }
        let Some(tree) = outcome.tree.prune() else {
            return Ok(None);
        };

        let mut classification = transform(&tree)?;
        if augment {
            classification.data = Some(merge(&classification, &self.lookup));
        }
        Ok(Some(classification))
    }

    fn cache(&self) -> MutexGuard<'_, Cache> {
        // Entries are never mutated after insert.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
