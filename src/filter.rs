//! Pure derivation of the visible catalog from the source list and the
//! current criteria.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PriceRangeError;
use crate::types::{ContentItem, PricingOption};

/// Inclusive price bounds applied to Paid items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, PriceRangeError> {
        if !min.is_finite() || !max.is_finite() { return Err(PriceRangeError::NotFinite); }
        if min > max { return Err(PriceRangeError::Inverted { min, max }); }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }

    pub fn contains(&self, price: f64) -> bool { price >= self.min && price <= self.max }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub keyword: String,
    pub selected_pricing: BTreeSet<PricingOption>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

impl FilterCriteria {
    pub fn new() -> Self { Self::default() }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_pricing<I: IntoIterator<Item = PricingOption>>(mut self, options: I) -> Self {
        self.selected_pricing = options.into_iter().collect();
        self
    }

    pub fn with_price_range(mut self, range: Option<PriceRange>) -> Self {
        self.price_range = range;
        self
    }

    /// Adds `option` if absent, removes it if present. Returns whether it is selected afterwards.
    pub fn toggle_pricing(&mut self, option: PricingOption) -> bool {
        if self.selected_pricing.remove(&option) {
            false
        } else {
            self.selected_pricing.insert(option);
            true
        }
    }

    /// True when no filter narrows the source list.
    pub fn is_empty(&self) -> bool {
        norm_keyword(&self.keyword).is_empty() && self.selected_pricing.is_empty()
    }

    /// The price range only takes part when Paid is selected.
    pub fn price_range_active(&self) -> bool {
        self.price_range.is_some() && self.selected_pricing.contains(&PricingOption::Paid)
    }
}

/// Derive the filtered view. Keeps source order and element identity.
pub fn apply(source: &[Arc<ContentItem>], criteria: &FilterCriteria) -> Vec<Arc<ContentItem>> {
    let needle = norm_keyword(&criteria.keyword);
    source
        .iter()
        .filter(|item| matches_keyword(item, &needle))
        .filter(|item| matches_pricing(item, &criteria.selected_pricing))
        .filter(|item| matches_price_range(item, criteria))
        .cloned()
        .collect()
}

/// Keyword + pricing form, with no price range.
pub fn apply_parts(
    source: &[Arc<ContentItem>],
    keyword: &str,
    selected_pricing: &BTreeSet<PricingOption>,
) -> Vec<Arc<ContentItem>> {
    let criteria = FilterCriteria {
        keyword: keyword.to_string(),
        selected_pricing: selected_pricing.clone(),
        price_range: None,
    };
    apply(source, &criteria)
}

pub fn item_matches(item: &ContentItem, criteria: &FilterCriteria) -> bool {
    matches_keyword(item, &norm_keyword(&criteria.keyword))
        && matches_pricing(item, &criteria.selected_pricing)
        && matches_price_range(item, criteria)
}

fn norm_keyword(k: &str) -> String { k.trim().to_lowercase() }

// `needle` is already trimmed and lowercased; empty means no keyword filter.
fn matches_keyword(item: &ContentItem, needle: &str) -> bool {
    if needle.is_empty() { return true; }
    item.title.to_lowercase().contains(needle) || item.creator.to_lowercase().contains(needle)
}

// Empty selection shows every category.
fn matches_pricing(item: &ContentItem, selected: &BTreeSet<PricingOption>) -> bool {
    selected.is_empty() || selected.contains(&item.pricing_option)
}

/// Narrows Paid items only; Free and View Only items always pass the range.
fn matches_price_range(item: &ContentItem, criteria: &FilterCriteria) -> bool {
    let Some(range) = criteria.price_range else { return true; };
    if !criteria.price_range_active() { return true; }
    if item.pricing_option != PricingOption::Paid { return true; }
    item.price.is_some_and(|p| range.contains(p))
}
