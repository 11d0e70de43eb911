//! Login page: email + password sign-in form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;
use crate::net::types::LoginRequest;
use crate::pages::validate;

/// Sign-in form. Validation failures stay on the form; remote rejections
/// surface through the session error banner. The submit control is disabled
/// while a sign-in is in flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    let pending = Signal::derive({
        let state = state.clone();
        move || state.get().is_loading()
    });
    let banner = Signal::derive({
        let state = state.clone();
        move || state.get().error().map(ToOwned::to_owned)
    });

    let on_email = {
        let session = session.clone();
        move |ev| {
            email.set(event_target_value(&ev));
            email_error.set(None);
            session.clear_error();
        }
    };
    let on_password = {
        let session = session.clone();
        move |ev| {
            password.set(event_target_value(&ev));
            password_error.set(None);
            session.clear_error();
        }
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        email_error.set(validate::email(&email.get_untracked()));
        password_error.set(validate::password(&password.get_untracked()));
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }
        let session = session.clone();
        let navigate = navigate.clone();
        let req = LoginRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            if session.login(&req).await.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your teacher account"</p>

                {move || {
                    banner.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                }}

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=on_email
                        />
                        {move || {
                            email_error.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })
                        }}
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=on_password
                        />
                        {move || {
                            password_error.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })
                        }}
                    </label>
                    <button class="btn btn--primary" type="submit" prop:disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <a href="/forgot-password">"Forgot your password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
