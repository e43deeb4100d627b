//! Domain Models
//!
//! Tier and frequency records for the pricing page, plus the resolver that
//! turns a tier and a selected frequency into display strings. Prices are
//! pre-baked display strings ("$599"), never numbers - this crate does no
//! price arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A billing frequency offered by the pricing page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyOption {
    /// Unique identifier
    pub id: String,

    /// Key used to index per-frequency prices; unique across all options
    pub value: String,

    /// Human-readable name (e.g., "Annually")
    pub label: String,

    /// Text appended after a tier's price (e.g., "/year")
    pub price_suffix: String,
}

impl FrequencyOption {
    pub fn new(
        id: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
        price_suffix: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            label: label.into(),
            price_suffix: price_suffix.into(),
        }
    }
}

/// A tier's price: either one string for every frequency, or a mapping
/// keyed by [`FrequencyOption::value`].
///
/// Untagged so the serialized shape stays a plain string or a plain object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Flat price shown regardless of the selected frequency
    Flat(String),

    /// Per-frequency prices keyed by frequency value
    ByFrequency(HashMap<String, String>),
}

impl Price {
    /// Resolve the display string for a frequency value.
    ///
    /// A missing key resolves to an empty string rather than an error.
    pub fn for_frequency(&self, value: &str) -> String {
        match self {
            Self::Flat(text) => text.clone(),
            Self::ByFrequency(map) => map.get(value).cloned().unwrap_or_default(),
        }
    }

    /// Whether this price varies with the selected frequency
    pub const fn is_by_frequency(&self) -> bool {
        matches!(self, Self::ByFrequency(_))
    }
}

/// One selectable pricing plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Display name (e.g., "Premium")
    pub name: String,

    /// Unique identifier
    pub id: String,

    /// Call-to-action target (e.g., "/subscribe"); passed through untouched
    pub href: String,

    /// Primary price
    pub price: Price,

    /// Struck-through original price shown alongside a markdown;
    /// an empty string means no discount is shown
    pub discount_price: Price,

    /// Short blurb shown under the tier name
    pub description: String,

    /// Feature descriptions, in display order
    pub features: Vec<String>,

    /// Dark emphasis card variant
    #[serde(default)]
    pub featured: bool,

    /// Glass-effect card variant, independent of `featured`
    #[serde(default)]
    pub highlighted: bool,

    /// Call-to-action label
    pub cta: String,

    /// Disables the call-to-action and shows a "Sold out" notice instead
    #[serde(default)]
    pub sold_out: bool,
}

impl PricingTier {
    /// Resolve the display price for the given frequency.
    ///
    /// Never fails: a mapping missing the frequency's key degrades to an
    /// empty display string.
    pub fn resolve_price(&self, frequency: &FrequencyOption) -> ResolvedPrice {
        ResolvedPrice {
            primary: self.price.for_frequency(&frequency.value),
            discount: self.discount_price.for_frequency(&frequency.value),
            show_suffix: self.price.is_by_frequency(),
        }
    }

    /// What the tier's card offers at the bottom: a sold-out notice when the
    /// tier cannot be purchased, otherwise an activatable link to `href`.
    pub fn call_to_action(&self) -> CallToAction {
        if self.sold_out {
            CallToAction::SoldOut
        } else {
            CallToAction::Link {
                href: self.href.clone(),
                label: self.cta.clone(),
            }
        }
    }
}

/// The purchase control for one tier's card
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Activatable link to the tier's target
    Link { href: String, label: String },

    /// Purchase is unavailable; a disabled notice replaces the link
    SoldOut,
}

/// Display strings for one tier at one frequency
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPrice {
    /// Primary price text; empty when the tier has no price for the frequency
    pub primary: String,

    /// Discount price text; empty when no discount applies
    pub discount: String,

    /// Whether the frequency's price suffix should follow the price
    pub show_suffix: bool,
}

impl ResolvedPrice {
    /// The primary price is struck through exactly when a discount is shown
    pub fn struck_through(&self) -> bool {
        !self.discount.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarterly() -> FrequencyOption {
        FrequencyOption::new("1", "1", "Quarter", "/quarter")
    }

    fn annually() -> FrequencyOption {
        FrequencyOption::new("2", "2", "Annually", "/year")
    }

    fn tier_with(price: Price, discount_price: Price) -> PricingTier {
        PricingTier {
            name: "Test".into(),
            id: "0".into(),
            href: "/subscribe".into(),
            price,
            discount_price,
            description: "A test tier".into(),
            features: vec!["Feature".into()],
            featured: false,
            highlighted: false,
            cta: "Get started".into(),
            sold_out: false,
        }
    }

    #[test]
    fn test_flat_price_ignores_frequency() {
        let tier = tier_with(Price::Flat("$99".into()), Price::Flat(String::new()));

        for freq in [quarterly(), annually()] {
            let resolved = tier.resolve_price(&freq);
            assert_eq!(resolved.primary, "$99");
            assert!(!resolved.show_suffix);
        }
    }

    #[test]
    fn test_by_frequency_price_indexes_by_value() {
        let tier = tier_with(
            Price::ByFrequency(HashMap::from([
                ("1".to_string(), "$199".to_string()),
                ("2".to_string(), "$699".to_string()),
            ])),
            Price::Flat(String::new()),
        );

        let resolved = tier.resolve_price(&quarterly());
        assert_eq!(resolved.primary, "$199");
        assert!(resolved.show_suffix);

        let resolved = tier.resolve_price(&annually());
        assert_eq!(resolved.primary, "$699");
        assert!(resolved.show_suffix);
    }

    #[test]
    fn test_missing_frequency_key_degrades_to_empty() {
        let tier = tier_with(
            Price::ByFrequency(HashMap::from([("1".to_string(), "$199".to_string())])),
            Price::ByFrequency(HashMap::new()),
        );

        let resolved = tier.resolve_price(&annually());
        assert_eq!(resolved.primary, "");
        assert_eq!(resolved.discount, "");
        assert!(resolved.show_suffix);
    }

    #[test]
    fn test_struck_through_tracks_discount() {
        let tier = tier_with(
            Price::ByFrequency(HashMap::from([("1".to_string(), "$199".to_string())])),
            Price::ByFrequency(HashMap::from([("1".to_string(), "$149".to_string())])),
        );

        assert!(tier.resolve_price(&quarterly()).struck_through());
        // No discount entry for this frequency, so nothing is struck
        assert!(!tier.resolve_price(&annually()).struck_through());
    }

    #[test]
    fn test_sold_out_tier_offers_no_link() {
        let mut tier = tier_with(Price::Flat("$99".into()), Price::Flat(String::new()));
        tier.sold_out = true;

        assert_eq!(tier.call_to_action(), CallToAction::SoldOut);
    }

    #[test]
    fn test_available_tier_links_to_href() {
        let tier = tier_with(Price::Flat("$99".into()), Price::Flat(String::new()));

        assert_eq!(
            tier.call_to_action(),
            CallToAction::Link {
                href: "/subscribe".into(),
                label: "Get started".into(),
            }
        );
    }

    #[test]
    fn test_price_deserializes_untagged() {
        let flat: Price = serde_json::from_str("\"$99\"").unwrap();
        assert_eq!(flat, Price::Flat("$99".into()));

        let mapped: Price = serde_json::from_str(r#"{"1": "$199", "2": "$699"}"#).unwrap();
        assert_eq!(mapped.for_frequency("2"), "$699");
    }
}
