//! Collapsible section navigation for the dashboard.

use leptos::prelude::*;

use crate::state::ui::UiState;

const SECTIONS: &[(&str, &str)] = &[
    ("#overview", "Overview"),
    ("#classes", "Classes"),
    ("#groups", "Groups"),
    ("#courses", "Courses"),
    ("#exams", "Exams"),
    ("#results", "Results"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        if ui.get().sidebar_open {
            "sidebar"
        } else {
            "sidebar sidebar--collapsed"
        }
    };

    view! {
        <nav class=class>
            <ul class="sidebar__items">
                {SECTIONS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="sidebar__item">
                                <a class="sidebar__link" href=*href>{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
