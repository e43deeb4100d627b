//! # pricing-core
//!
//! Data model and resolution logic for the pricing page.
//!
//! The pricing catalog is a static table of tiers and billing frequencies.
//! A tier's price is either flat or keyed by billing frequency, and the one
//! piece of runtime state is which frequency the visitor currently has
//! selected. This crate holds all of that logic so the frontend crate stays
//! a thin view layer:
//!
//! - [`model`] - tier and frequency records plus per-frequency price
//!   resolution
//! - [`selection`] - the single mutable cell tracking the selected frequency
//! - [`catalog`] - the shipped tiers and frequencies

pub mod catalog;
pub mod model;
pub mod selection;

pub use catalog::{BANNER_TEXT, frequencies, tiers};
pub use model::{CallToAction, FrequencyOption, Price, PricingTier, ResolvedPrice};
pub use selection::FrequencySelection;
