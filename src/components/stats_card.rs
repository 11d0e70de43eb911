//! Small numeric tile for the overview row.

use leptos::prelude::*;

/// A single headline figure with a label underneath.
#[component]
pub fn StatsCard(
    label: &'static str,
    value: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <span class="stats-card__value">{value}</span>
            <span class="stats-card__label">{label}</span>
            {detail.map(|d| view! { <span class="stats-card__detail">{d}</span> })}
        </div>
    }
}
