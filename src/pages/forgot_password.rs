//! Forgot-password page: requests a reset code by email and routes to the
//! confirmation step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;
use crate::pages::validate;
use crate::util::query;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    // Reset requests do not raise the session pending flag; the form keeps
    // its own submitting state so the button still guards double clicks.
    let submitting = RwSignal::new(false);

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

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        email_error.set(validate::email(&email.get_untracked()));
        if email_error.get_untracked().is_some() || submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        let address = email.get_untracked().trim().to_owned();
        leptos::task::spawn_local(async move {
            let result = session.request_password_reset(&address).await;
            submitting.set(false);
            if result.is_ok() {
                let target = format!("/reset-password?email={}", query::encode(&address));
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Reset your password"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and we will send you a reset code"
                </p>

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
                    <button class="btn btn--primary" type="submit" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send reset code" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
