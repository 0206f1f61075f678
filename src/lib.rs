pub mod config;
pub mod error;
pub mod filter;
pub mod repository;
pub mod store;
pub mod types;
pub mod view;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::error::{ConfigError, FetchError, PriceRangeError};
    pub use crate::filter::{FilterCriteria, PriceRange};
    pub use crate::repository::{ContentSource, HttpContentSource, StaticContentSource};
    pub use crate::store::{ContentStore, LoadState};
    pub use crate::types::{ContentItem, PricingOption};
    pub use crate::view::{Card, PriceLabel};
    pub use crate::Showcase;
}

use std::sync::Arc;

use anyhow::Result;

use crate::config::Settings;
use crate::error::FetchError;
use crate::filter::FilterCriteria;
use crate::repository::{ContentSource, HttpContentSource};
use crate::store::{ContentStore, LoadState};
use crate::types::ContentItem;
use crate::view::Card;

/// Library entry point. Owns the content source and the state store the view layer reads.
pub struct Showcase {
    source: Box<dyn ContentSource>,
    store: ContentStore,
}

impl Showcase {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self { source: Box::new(source), store: ContentStore::new() }
    }

    /// Build an HTTP-backed instance from settings. Does not fetch.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let source = HttpContentSource::new(settings.endpoint.clone(), &settings.user_agent)?;
        Ok(Self::new(source))
    }

    pub fn store(&self) -> &ContentStore { &self.store }
    pub fn store_mut(&mut self) -> &mut ContentStore { &mut self.store }

    /// Fetch the catalog and populate the store. Calling it again after a
    /// failure is the retry path; on failure the previous items are kept.
    pub async fn load(&mut self) -> Result<usize, FetchError> {
        self.store.set_load_state(LoadState::Loading);
        match self.source.fetch_all().await {
            Ok(items) => {
                let count = items.len();
                self.store.set_items(items);
                // Criteria chosen before the data arrived should take effect.
                self.store.apply_filters();
                self.store.set_load_state(LoadState::Loaded { count });
                tracing::info!(count, "catalog loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.store.set_load_state(LoadState::Failed { message: e.to_string() });
                Err(e)
            }
        }
    }

    pub fn update_filters(&mut self, criteria: FilterCriteria) -> &[Arc<ContentItem>] {
        self.store.update_filters(criteria)
    }

    pub fn reset_filters(&mut self) { self.store.reset_filters() }

    pub fn cards(&self) -> Vec<Card> { view::cards(&self.store) }
}
