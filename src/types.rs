use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pricing category of a catalog item. Carried on the wire as `0 | 1 | 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PricingOption {
    Paid,
    Free,
    ViewOnly,
}

impl PricingOption {
    pub const ALL: [PricingOption; 3] = [PricingOption::Paid, PricingOption::Free, PricingOption::ViewOnly];

    pub fn code(self) -> u8 {
        match self {
            PricingOption::Paid => 0,
            PricingOption::Free => 1,
            PricingOption::ViewOnly => 2,
        }
    }

    /// Label used by filter controls.
    pub fn label(self) -> &'static str {
        match self {
            PricingOption::Paid => "Paid",
            PricingOption::Free => "Free",
            PricingOption::ViewOnly => "View Only",
        }
    }
}

impl TryFrom<u8> for PricingOption {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PricingOption::Paid),
            1 => Ok(PricingOption::Free),
            2 => Ok(PricingOption::ViewOnly),
            other => Err(format!("unknown pricingOption `{}` (expected 0, 1 or 2)", other)),
        }
    }
}

impl From<PricingOption> for u8 {
    fn from(p: PricingOption) -> u8 { p.code() }
}

impl FromStr for PricingOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" | "0" => Ok(PricingOption::Paid),
            "free" | "1" => Ok(PricingOption::Free),
            "view-only" | "view_only" | "viewonly" | "view only" | "2" => Ok(PricingOption::ViewOnly),
            other => Err(format!(
                "unknown pricing option `{}` (expected paid, free, view-only)",
                other
            )),
        }
    }
}

impl fmt::Display for PricingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// One record of the remote catalog. Older payloads name `creator` as `user`
/// and `imagePath` as `photo`; both spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(alias = "user")]
    pub creator: String,
    pub title: String,
    pub pricing_option: PricingOption,
    #[serde(alias = "photo")]
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_record() {
        let raw = r#"{"id":"a1","creator":"Alice","title":"Blue Cap","pricingOption":0,"imagePath":"https://img/1.jpg","price":9.99}"#;
        let item: ContentItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.creator, "Alice");
        assert_eq!(item.pricing_option, PricingOption::Paid);
        assert_eq!(item.image_path, "https://img/1.jpg");
        assert_eq!(item.price, Some(9.99));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let raw = r#"{"id":"b2","user":"Bob","title":"Red Hat","pricingOption":1,"photo":"p.png"}"#;
        let item: ContentItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.creator, "Bob");
        assert_eq!(item.image_path, "p.png");
        assert_eq!(item.pricing_option, PricingOption::Free);
        assert_eq!(item.price, None);
    }

    #[test]
    fn rejects_unknown_pricing_code() {
        let raw = r#"{"id":"c","creator":"C","title":"T","pricingOption":7,"imagePath":"x"}"#;
        let err = serde_json::from_str::<ContentItem>(raw).unwrap_err();
        assert!(err.to_string().contains("unknown pricingOption"));
    }

    #[test]
    fn serializes_with_canonical_names() {
        let item = ContentItem {
            id: "v".into(),
            creator: "Vee".into(),
            title: "Scarf".into(),
            pricing_option: PricingOption::ViewOnly,
            image_path: "s.jpg".into(),
            price: None,
        };
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["pricingOption"], 2);
        assert_eq!(v["imagePath"], "s.jpg");
        assert!(v.get("price").is_none());
        assert!(v.get("user").is_none());
    }

    #[test]
    fn pricing_option_from_cli_names() {
        assert_eq!("Paid".parse::<PricingOption>().unwrap(), PricingOption::Paid);
        assert_eq!("view-only".parse::<PricingOption>().unwrap(), PricingOption::ViewOnly);
        assert_eq!("1".parse::<PricingOption>().unwrap(), PricingOption::Free);
        assert!("gratis".parse::<PricingOption>().is_err());
    }
}
