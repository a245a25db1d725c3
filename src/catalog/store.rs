//! Catalog loading policy: cache → live listing → seed.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::{CatalogError, CatalogResult};
use super::index::CatalogIndex;
use super::record::AssessmentRecord;
use super::seed::seed_catalog;
use super::source::CatalogSource;
use crate::embedding::Embedder;

/// Where a loaded record list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Cache,
    Live,
    Seed,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CatalogOrigin::Cache => "cache",
            CatalogOrigin::Live => "live",
            CatalogOrigin::Seed => "seed",
        })
    }
}

/// Loads assessment records with fallbacks and writes fresh listings back to the cache.
pub struct CatalogStore {
    cache_path: PathBuf,
    source: Option<Arc<dyn CatalogSource>>,
    seed: Option<Vec<AssessmentRecord>>,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("cache_path", &self.cache_path)
            .field("source", &self.source.as_ref().map(|s| s.describe()))
            .field("seed_records", &self.seed.as_ref().map(Vec::len))
            .finish()
    }
}

impl CatalogStore {
    /// A store with only a cache file: no live source, no seed.
    pub fn new<P: Into<PathBuf>>(cache_path: P) -> Self {
        Self {
            cache_path: cache_path.into(),
            source: None,
            seed: None,
        }
    }

    /// Live listing consulted on a cache miss.
    pub fn with_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Records used when both cache and source fail.
    pub fn with_seed(mut self, seed: Vec<AssessmentRecord>) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Uses the built-in seed catalog as the last fallback.
    pub fn with_builtin_seed(self) -> Self {
        self.with_seed(seed_catalog())
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Loads records following the cache → live → seed policy.
    ///
    /// Duplicate names are dropped (first occurrence wins) since evaluation matches on name.
    pub async fn load_records(&self) -> CatalogResult<(Vec<AssessmentRecord>, CatalogOrigin)> {
        let mut failures: Vec<String> = Vec::new();

        match self.read_cache() {
            Ok(records) if !records.is_empty() => {
                info!(
                    path = %self.cache_path.display(),
                    records = records.len(),
                    "Loaded assessment catalog from cache"
                );
                return Ok((dedupe_by_name(records), CatalogOrigin::Cache));
            }
            Ok(_) => {
                warn!(path = %self.cache_path.display(), "Catalog cache is empty");
                failures.push("cache empty".to_string());
            }
            Err(e) => {
                debug!(error = %e, "Catalog cache miss");
                failures.push(e.to_string());
            }
        }

        if let Some(source) = &self.source {
            info!(source = %source.describe(), "Fetching fresh assessment catalog");
            match source.fetch().await {
                Ok(records) => {
                    let records = dedupe_by_name(records);
                    if let Err(e) = self.write_cache(&records) {
                        warn!(error = %e, "Failed to persist fetched catalog; continuing");
                    }
                    return Ok((records, CatalogOrigin::Live));
                }
                Err(e) => {
                    warn!(error = %e, "Live catalog fetch failed");
                    failures.push(e.to_string());
                }
            }
        }

        if let Some(seed) = &self.seed {
            warn!(records = seed.len(), "Using built-in seed catalog");
            return Ok((dedupe_by_name(seed.clone()), CatalogOrigin::Seed));
        }

        Err(CatalogError::Unavailable {
            reason: failures.join("; "),
        })
    }

    /// Loads records and embeds them into a fresh [`CatalogIndex`].
    pub async fn load_index<E>(&self, embedder: &E) -> CatalogResult<(CatalogIndex, CatalogOrigin)>
    where
        E: Embedder + ?Sized,
    {
        let (records, origin) = self.load_records().await?;
        let index = CatalogIndex::build(records, embedder)?;
        Ok((index, origin))
    }

    /// Reads the cache file (a JSON array of records).
    pub fn read_cache(&self) -> CatalogResult<Vec<AssessmentRecord>> {
        let bytes = std::fs::read(&self.cache_path).map_err(|source| CatalogError::CacheRead {
            path: self.cache_path.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::CacheParse {
            path: self.cache_path.clone(),
            source,
        })
    }

    /// Writes `records` to the cache file via a temp file + rename.
    pub fn write_cache(&self, records: &[AssessmentRecord]) -> CatalogResult<()> {
        let write_err = |reason: String| CatalogError::CacheWrite {
            path: self.cache_path.clone(),
            reason,
        };

        let parent = match self.cache_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| write_err(e.to_string()))?;

        let json = serde_json::to_vec_pretty(records).map_err(|e| write_err(e.to_string()))?;

        let mut temp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| write_err(e.to_string()))?;
        temp.write_all(&json).map_err(|e| write_err(e.to_string()))?;
        temp.flush().map_err(|e| write_err(e.to_string()))?;
        temp.persist(&self.cache_path)
            .map_err(|e| write_err(e.error.to_string()))?;

        info!(
            path = %self.cache_path.display(),
            records = records.len(),
            "Catalog cache written"
        );
        Ok(())
    }
}

fn dedupe_by_name(records: Vec<AssessmentRecord>) -> Vec<AssessmentRecord> {
    let mut seen = HashSet::new();
    let total = records.len();
    let unique: Vec<AssessmentRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.name.clone()))
        .collect();

    if unique.len() != total {
        warn!(
            dropped = total - unique.len(),
            "Dropped catalog records with duplicate names"
        );
    }
    unique
}
