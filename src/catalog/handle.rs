//! Shared, atomically swappable catalog snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::info;

use super::error::CatalogResult;
use super::index::CatalogIndex;
use super::store::{CatalogOrigin, CatalogStore};
use crate::embedding::Embedder;

/// Result of [`CatalogHandle::reload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadOutcome {
    pub records: usize,
    pub version: String,
    pub changed: bool,
    pub origin: CatalogOrigin,
}

/// Publishes the current [`CatalogIndex`] to concurrent readers.
///
/// Readers call [`snapshot`](Self::snapshot) once per request and keep the returned `Arc`;
/// a concurrent [`swap`](Self::swap) never affects a snapshot already taken. The lock is
/// held only long enough to clone or replace the pointer.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<CatalogIndex>>,
}

impl CatalogHandle {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Returns the current snapshot.
    #[inline]
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        self.current.read().clone()
    }

    /// Publishes `index` and returns the previous snapshot.
    pub fn swap(&self, index: CatalogIndex) -> Arc<CatalogIndex> {
        let next = Arc::new(index);
        std::mem::replace(&mut *self.current.write(), next)
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Rebuilds the index through `store` and swaps it in.
    ///
    /// Loading and embedding happen before the swap; on error the current snapshot stays
    /// published.
    pub async fn reload<E>(&self, store: &CatalogStore, embedder: &E) -> CatalogResult<ReloadOutcome>
    where
        E: Embedder + ?Sized,
    {
        let (index, origin) = store.load_index(embedder).await?;
        let version = index.version().to_string();
        let records = index.len();

        let previous = self.swap(index);
        let changed = previous.version() != version;

        info!(
            records,
            origin = %origin,
            changed,
            version = %&version[..12.min(version.len())],
            "Catalog reloaded"
        );

        Ok(ReloadOutcome {
            records,
            version,
            changed,
            origin,
        })
    }
}
