//! UI Components

use leptos::prelude::*;
use pricing_core::{CallToAction, FrequencySelection, PricingTier};

/// Mutually-exclusive billing frequency selector
#[component]
pub fn FrequencyToggle(
    selection: ReadSignal<FrequencySelection>,
    set_selection: WriteSignal<FrequencySelection>,
) -> impl IntoView {
    let options = selection.get_untracked().options().to_vec();

    view! {
        <div class="frequency-toggle" role="radiogroup">
            <p class="sr-only">"Payment frequency"</p>
            {options
                .into_iter()
                .map(|option| {
                    let checked = {
                        let value = option.value.clone();
                        move || selection.get().is_selected(&value)
                    };
                    let checked_attr = {
                        let value = option.value.clone();
                        move || selection.get().is_selected(&value).to_string()
                    };
                    let pick = {
                        let value = option.value.clone();
                        move |_| set_selection.update(|s| s.select(&value))
                    };

                    view! {
                        <button
                            id=option.id.clone()
                            class="frequency-option"
                            class:selected=checked
                            role="radio"
                            aria-checked=checked_attr
                            on:click=pick
                        >
                            {option.label.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One pricing tier card
#[component]
pub fn TierCard(tier: PricingTier, selection: ReadSignal<FrequencySelection>) -> impl IntoView {
    let resolved = {
        let tier = tier.clone();
        Memo::new(move |_| tier.resolve_price(selection.get().selected()))
    };

    let card_class = format!(
        "plan{}{}",
        if tier.featured { " featured" } else { "" },
        if tier.highlighted { " fancyGlassContrast" } else { "" },
    );

    let cta = match tier.call_to_action() {
        CallToAction::SoldOut => view! { <div class="sold-out">"Sold out"</div> }.into_any(),
        CallToAction::Link { href, label } => {
            view! {
                <a href=href class="btn btn-primary">
                    {label}
                </a>
            }
            .into_any()
        }
    };

    view! {
        <div class=card_class>
            <h3 id=tier.id.clone()>{tier.name.clone()}</h3>
            <p class="description">{tier.description.clone()}</p>

            <p class="price-line">
                <span class="price" class:struck=move || resolved.get().struck_through()>
                    {move || resolved.get().primary}
                </span>
                <span class="discount">{move || resolved.get().discount}</span>
                <Show when=move || resolved.get().show_suffix>
                    <span class="suffix">
                        {move || selection.get().selected().price_suffix.clone()}
                    </span>
                </Show>
            </p>

            <ul class="features" role="list">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <CheckIcon />
                                {feature.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="cta">{cta}</div>
        </div>
    }
}

/// Check glyph shown before each feature
#[component]
pub fn CheckIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="currentColor"
            class="check-icon"
        >
            <path
                fill-rule="evenodd"
                d="M2.25 12c0-5.385 4.365-9.75 9.75-9.75s9.75 4.365 9.75 9.75-4.365 9.75-9.75 9.75S2.25 17.385 2.25 12zm13.36-1.814a.75.75 0 10-1.22-.872l-3.236 4.53L9.53 12.22a.75.75 0 00-1.06 1.06l2.25 2.25a.75.75 0 001.14-.094l3.75-5.25z"
                clip-rule="evenodd"
            />
        </svg>
    }
}
