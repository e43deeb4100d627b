//! Shipped Catalog
//!
//! The static tier and frequency tables the pricing page renders. Defined
//! once at startup and never mutated; prices are display strings keyed by
//! frequency value.

use std::collections::HashMap;

use crate::model::{FrequencyOption, Price, PricingTier};

/// Banner paragraph shown above the frequency toggle.
///
/// Ships empty, which hides the banner entirely.
pub const BANNER_TEXT: &str = "";

/// The billing frequencies on offer, in display order
pub fn frequencies() -> Vec<FrequencyOption> {
    vec![
        FrequencyOption::new("1", "1", "Quarter", "/quarter"),
        FrequencyOption::new("2", "2", "Annually", "/year"),
    ]
}

/// The pricing tiers, in display order
pub fn tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Basic".into(),
            id: "0".into(),
            href: "/subscribe".into(),
            price: by_frequency([("1", "$199"), ("2", "$699")]),
            discount_price: no_discount(),
            description: "Ideal for small agencies just starting with influencer marketing"
                .into(),
            features: vec![
                "Core Tool Access".into(),
                "Basic Analytics".into(),
                "Full Influencer Database".into(),
                "Up to 10 Videos/Month".into(),
                "Basic Customer Support".into(),
            ],
            featured: false,
            highlighted: false,
            cta: "Get started".into(),
            sold_out: false,
        },
        PricingTier {
            name: "Premium".into(),
            id: "1".into(),
            href: "/subscribe".into(),
            price: by_frequency([("1", "$599"), ("2", "$1999")]),
            discount_price: no_discount(),
            description: "Aimed at agencies with moderate influencer.".into(),
            features: vec![
                "AI-powered Creater Sourcing".into(),
                "Audience Insight Reports".into(),
                "Full Influencer Database".into(),
                "Up to 35 Videos/Month".into(),
                "Priority Customer Support".into(),
            ],
            featured: false,
            highlighted: true,
            cta: "Get started".into(),
            sold_out: false,
        },
        PricingTier {
            name: "Enterprise".into(),
            id: "2".into(),
            href: "/contact-us".into(),
            price: by_frequency([("1", "$1499"), ("2", "$4999")]),
            discount_price: no_discount(),
            description: "Suited for large agencies managing multiple clients and campaigns"
                .into(),
            features: vec![
                "Customizable Analytics".into(),
                "Integration Support & Training".into(),
                "Full influencer Database".into(),
                "Up to 100 Videos/Month".into(),
                "Dedicated Account Manager".into(),
            ],
            featured: true,
            highlighted: false,
            cta: "Get started".into(),
            sold_out: false,
        },
    ]
}

fn by_frequency<const N: usize>(entries: [(&str, &str); N]) -> Price {
    Price::ByFrequency(
        entries
            .into_iter()
            .map(|(value, price)| (value.to_string(), price.to_string()))
            .collect::<HashMap<_, _>>(),
    )
}

/// Empty entries for every shipped frequency, so nothing is struck through
fn no_discount() -> Price {
    by_frequency([("1", ""), ("2", "")])
}
