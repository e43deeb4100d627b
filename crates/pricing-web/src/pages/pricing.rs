//! Pricing Page

use leptos::prelude::*;
use pricing_core::{BANNER_TEXT, FrequencySelection, frequencies, tiers};

use crate::components::{FrequencyToggle, TierCard};

#[component]
pub fn PricingPage() -> impl IntoView {
    // The page's only mutable state; everything else re-derives from it.
    let (selection, set_selection) = signal(FrequencySelection::new(frequencies()));

    view! {
        <div class="pricing fancyOverlay">
            <h1>"Pricing"</h1>

            {(!BANNER_TEXT.is_empty()).then(|| {
                view! {
                    <div class="banner">
                        <p>{BANNER_TEXT}</p>
                    </div>
                }
            })}

            {if selection.get_untracked().show_selector() {
                view! { <FrequencyToggle selection set_selection /> }.into_any()
            } else {
                view! { <div class="toggle-spacer" aria-hidden="true"></div> }.into_any()
            }}

            <div class="plans">
                {tiers()
                    .into_iter()
                    .map(|tier| view! { <TierCard tier selection /> })
                    .collect_view()}
            </div>
        </div>
    }
}
