use std::sync::Arc;

use crate::catalog::{CatalogHandle, CatalogStore};
use crate::embedding::Embedder;
use crate::jobdesc::JobDescriptionSource;
use crate::ranking::RankingEngine;

pub struct HandlerState<E: Embedder + 'static> {
    pub catalog: Arc<CatalogHandle>,

    pub engine: RankingEngine<E>,

    pub job_source: Arc<dyn JobDescriptionSource>,

    /// Used by `/catalog/reload`; `None` disables reloading.
    pub store: Option<Arc<CatalogStore>>,

    pub default_top_k: usize,
}

impl<E: Embedder + 'static> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            engine: self.engine.clone(),
            job_source: Arc::clone(&self.job_source),
            store: self.store.clone(),
            default_top_k: self.default_top_k,
        }
    }
}

impl<E: Embedder + 'static> HandlerState<E> {
    pub fn new(
        catalog: Arc<CatalogHandle>,
        engine: RankingEngine<E>,
        job_source: Arc<dyn JobDescriptionSource>,
        default_top_k: usize,
    ) -> Self {
        Self {
            catalog,
            engine,
            job_source,
            store: None,
            default_top_k,
        }
    }

    pub fn with_store(mut self, store: Arc<CatalogStore>) -> Self {
        self.store = Some(store);
        self
    }
}
