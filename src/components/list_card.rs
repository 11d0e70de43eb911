//! Generic titled card holding a short list of rows.

use leptos::prelude::*;

/// One display row: a primary line, an optional secondary line, and an
/// optional right-aligned figure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub primary: String,
    pub secondary: Option<String>,
    pub meta: Option<String>,
}

/// Titled card with rows; shows a placeholder when the list is empty.
#[component]
pub fn ListCard(title: &'static str, anchor: &'static str, rows: Vec<ListRow>) -> impl IntoView {
    view! {
        <section class="list-card" id=anchor>
            <h2 class="list-card__title">{title}</h2>
            {if rows.is_empty() {
                view! { <p class="list-card__empty">"Nothing here yet"</p> }.into_any()
            } else {
                view! {
                    <ul class="list-card__rows">
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <li class="list-card__row">
                                        <div class="list-card__text">
                                            <span class="list-card__primary">{row.primary}</span>
                                            {row.secondary
                                                .map(|s| view! { <span class="list-card__secondary">{s}</span> })}
                                        </div>
                                        {row.meta.map(|m| view! { <span class="list-card__meta">{m}</span> })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
