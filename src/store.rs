use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::filter::{self, FilterCriteria, PriceRange};
use crate::types::{ContentItem, PricingOption};

/// Where the one-shot catalog fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded { count: usize },
    Failed { message: String },
}

/// Source list, filter criteria and the derived view.
///
/// The `set_*` mutators only record criteria; call [`ContentStore::apply_filters`]
/// afterwards, or use [`ContentStore::update_filters`] to do both at once.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    items: Vec<Arc<ContentItem>>,
    filtered_items: Vec<Arc<ContentItem>>,
    criteria: FilterCriteria,
    load_state: LoadState,
}

impl ContentStore {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[Arc<ContentItem>] { &self.items }
    pub fn filtered_items(&self) -> &[Arc<ContentItem>] { &self.filtered_items }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn keyword(&self) -> &str { &self.criteria.keyword }
    pub fn selected_pricing(&self) -> &BTreeSet<PricingOption> { &self.criteria.selected_pricing }
    pub fn price_range(&self) -> Option<PriceRange> { self.criteria.price_range }
    pub fn load_state(&self) -> &LoadState { &self.load_state }

    /// Replace the source list. The view is reset to the full list; criteria are not reapplied.
    pub fn set_items<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<Arc<ContentItem>>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.filtered_items = self.items.clone();
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) { self.criteria.keyword = keyword.into(); }

    pub fn set_selected_pricing<I: IntoIterator<Item = PricingOption>>(&mut self, options: I) {
        self.criteria.selected_pricing = options.into_iter().collect();
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) { self.criteria.price_range = range; }

    pub fn toggle_selected_pricing(&mut self, option: PricingOption) -> bool {
        self.criteria.toggle_pricing(option)
    }

    /// Clear every criterion and show the whole source list again.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.filtered_items = self.items.clone();
    }

    pub fn apply_filters(&mut self) -> &[Arc<ContentItem>] {
        self.filtered_items = filter::apply(&self.items, &self.criteria);
        tracing::debug!(
            keyword = %self.criteria.keyword,
            pricing = ?self.criteria.selected_pricing,
            shown = self.filtered_items.len(),
            total = self.items.len(),
            "filters applied"
        );
        &self.filtered_items
    }

    /// Replace all criteria and recompute the view in one step.
    pub fn update_filters(&mut self, criteria: FilterCriteria) -> &[Arc<ContentItem>] {
        if let Some(range) = criteria.price_range.filter(|_| !criteria.price_range_active()) {
            tracing::warn!(min = range.min(), max = range.max(), "price range ignored: Paid is not selected");
        }
        self.criteria = criteria;
        self.apply_filters()
    }

    pub(crate) fn set_load_state(&mut self, state: LoadState) { self.load_state = state; }
}
