//! Text rendering of the card grid.

use std::fmt;

use serde::Serialize;

use crate::store::ContentStore;
use crate::types::{ContentItem, PricingOption};

const CELL_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PriceLabel {
    Price(f64),
    Paid,
    Free,
    ViewOnly,
}

impl PriceLabel {
    pub fn for_item(item: &ContentItem) -> Self {
        match (item.pricing_option, item.price) {
            (PricingOption::Paid, Some(p)) => PriceLabel::Price(p),
            (PricingOption::Paid, None) => PriceLabel::Paid,
            (PricingOption::Free, _) => PriceLabel::Free,
            (PricingOption::ViewOnly, _) => PriceLabel::ViewOnly,
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLabel::Price(p) => f.write_str(&format_currency(*p)),
            PriceLabel::Paid => f.write_str("$—"),
            PriceLabel::Free => f.write_str("FREE"),
            PriceLabel::ViewOnly => f.write_str("View Only"),
        }
    }
}

/// Dollar amount with two decimals and thousands separators.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub image_path: String,
    pub label: PriceLabel,
}

impl From<&ContentItem> for Card {
    fn from(item: &ContentItem) -> Self {
        Card {
            id: item.id.clone(),
            title: item.title.clone(),
            creator: item.creator.clone(),
            image_path: item.image_path.clone(),
            label: PriceLabel::for_item(item),
        }
    }
}

pub fn cards(store: &ContentStore) -> Vec<Card> {
    store.filtered_items().iter().map(|i| Card::from(i.as_ref())).collect()
}

/// Lay cards out in rows of at most `columns`. Each card takes three lines:
/// title, creator, price label.
pub fn render_grid(cards: &[Card], columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();
    for row in cards.chunks(columns) {
        let lines: [Vec<String>; 3] = [
            row.iter().map(|c| cell(&c.title)).collect(),
            row.iter().map(|c| cell(&c.creator)).collect(),
            row.iter().map(|c| cell(&c.label.to_string())).collect(),
        ];
        for line in lines {
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// "N of M items" while a filter narrows the view, "M items" otherwise.
pub fn summary(store: &ContentStore) -> String {
    let (shown, total) = (store.filtered_items().len(), store.items().len());
    if store.criteria().is_empty() && shown == total {
        format!("{} items", total)
    } else {
        format!("{} of {} items", shown, total)
    }
}

fn cell(text: &str) -> String {
    let count = text.chars().count();
    if count > CELL_WIDTH {
        let mut s: String = text.chars().take(CELL_WIDTH - 1).collect();
        s.push('…');
        s
    } else {
        format!("{:<width$}", text, width = CELL_WIDTH)
    }
}
