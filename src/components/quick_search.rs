//! Header search box over the loaded dashboard entities.
//!
//! The dashboard page publishes its entities into a shared index signal;
//! the search box filters that index client-side as the user types.

use leptos::prelude::*;

use crate::net::types::DashboardData;

#[cfg(test)]
#[path = "quick_search_test.rs"]
mod quick_search_test;

const MAX_RESULTS: usize = 8;

/// One searchable entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchEntry {
    pub kind: &'static str,
    pub label: String,
    pub detail: String,
}

/// Flatten the dashboard aggregate into searchable entries.
pub fn build_index(data: &DashboardData) -> Vec<SearchEntry> {
    let mut index = Vec::new();
    for class in &data.classes {
        index.push(SearchEntry {
            kind: "Class",
            label: class.name.clone(),
            detail: class.year.clone(),
        });
    }
    for group in &data.groups {
        index.push(SearchEntry {
            kind: "Group",
            label: group.name.clone(),
            detail: group.class_name.clone(),
        });
    }
    for course in &data.recent_courses {
        index.push(SearchEntry {
            kind: "Course",
            label: course.name.clone(),
            detail: course.class_id.name.clone(),
        });
    }
    for exam in &data.recent_exams {
        index.push(SearchEntry {
            kind: "Exam",
            label: exam.title.clone(),
            detail: exam.course_id.name.clone(),
        });
    }
    index
}

/// Case-insensitive substring match over label and detail, capped at
/// `MAX_RESULTS`. A blank query matches nothing.
pub fn filter_entries(index: &[SearchEntry], query: &str) -> Vec<SearchEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|entry| {
            entry.label.to_lowercase().contains(&needle)
                || entry.detail.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

#[component]
pub fn QuickSearch() -> impl IntoView {
    let index = expect_context::<RwSignal<Vec<SearchEntry>>>();
    let query = RwSignal::new(String::new());

    let results = Signal::derive(move || filter_entries(&index.get(), &query.get()));

    view! {
        <div class="quick-search">
            <input
                class="quick-search__input"
                type="search"
                placeholder="Search classes, groups, courses..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !results.get().is_empty()>
                <ul class="quick-search__results">
                    <For
                        each=move || results.get()
                        key=|entry| (entry.kind, entry.label.clone())
                        let:entry
                    >
                        <li class="quick-search__result">
                            <span class="quick-search__kind">{entry.kind}</span>
                            <span class="quick-search__label">{entry.label.clone()}</span>
                            <span class="quick-search__detail">{entry.detail.clone()}</span>
                        </li>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
