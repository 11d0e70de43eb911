//! Top bar: sidebar toggle, search, dark mode, and the session menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;
use crate::components::quick_search::QuickSearch;
use crate::state::ui::UiState;
use crate::util::browser;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let teacher_name = {
        let state = state.clone();
        move || {
            state
                .get()
                .teacher()
                .map(|t| t.name.clone())
                .unwrap_or_default()
        }
    };

    let toggle_sidebar = move |_| {
        ui.update(|u| u.sidebar_open = !u.sidebar_open);
    };

    let toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = browser::toggle_dark(u.dark_mode));
    };

    let logout = {
        let session = session.clone();
        move |_| {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.logout().await;
                navigate("/login", NavigateOptions::default());
            });
        }
    };

    view! {
        <header class="header">
            <button class="header__burger" on:click=toggle_sidebar aria-label="Toggle navigation">
                "☰"
            </button>
            <span class="header__brand">"ClassDesk"</span>

            <QuickSearch/>

            <div class="header__spacer"></div>

            <button class="header__icon-btn" on:click=toggle_dark aria-label="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <span class="header__user">{teacher_name}</span>
            <button class="btn btn--ghost" on:click=logout>"Sign out"</button>
        </header>
    }
}
