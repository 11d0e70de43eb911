//! Route guards enforcing the session's authentication category.
//!
//! Protected content never renders without a valid session; guest-only
//! content (the auth pages) never renders when a session exists. While the
//! session is still bootstrapping both guards show a spinner instead of
//! guessing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;

fn spinner() -> impl IntoView {
    view! {
        <div class="page-loading">
            <div class="page-loading__spinner"></div>
        </div>
    }
}

/// Wraps content that requires an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    Effect::new({
        let state = state.clone();
        move || {
            let s = state.get();
            if !s.is_loading() && !s.is_authenticated() {
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    let authed = {
        let state = state.clone();
        move || state.get().is_authenticated()
    };

    view! {
        <Show when=authed fallback=spinner>
            {children()}
        </Show>
    }
}

/// Wraps the auth pages: an already signed-in teacher goes straight to the
/// dashboard.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    Effect::new({
        let state = state.clone();
        move || {
            if state.get().is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        }
    });

    // Note `is_bootstrapping`, not `is_loading`: the form must stay mounted
    // while its own submission is pending.
    let guest = {
        let state = state.clone();
        move || {
            let s = state.get();
            !s.is_bootstrapping() && !s.is_authenticated()
        }
    };

    view! {
        <Show when=guest fallback=spinner>
            {children()}
        </Show>
    }
}
