//! Registration page. Creating an account never signs the caller in; on
//! success the new teacher is routed to the email verification step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::Session;
use crate::net::types::RegisterRequest;
use crate::pages::validate;
use crate::util::query;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

    let pending = Signal::derive({
        let state = state.clone();
        move || state.get().is_loading()
    });
    let banner = Signal::derive({
        let state = state.clone();
        move || state.get().error().map(ToOwned::to_owned)
    });

    let clear_remote = Callback::new({
        let session = session.clone();
        move |()| session.clear_error()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        name_error.set(validate::required(&name.get_untracked(), "Name is required"));
        email_error.set(validate::email(&email.get_untracked()));
        password_error.set(validate::new_password(&password.get_untracked()));
        confirm_error.set(validate::password_confirmation(
            &password.get_untracked(),
            &confirm.get_untracked(),
        ));
        if name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || confirm_error.get_untracked().is_some()
        {
            return;
        }

        let optional = |signal: RwSignal<String>| {
            let value = signal.get_untracked().trim().to_owned();
            if value.is_empty() { None } else { Some(value) }
        };
        let req = RegisterRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            phone: optional(phone),
            specialization: optional(specialization),
        };
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session.register(&req).await.is_ok() {
                let target = format!("/verify-email?email={}", query::encode(&req.email));
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      value: RwSignal<String>,
                      error: RwSignal<Option<&'static str>>| {
        view! {
            <label class="auth-form__field">
                {label}
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        error.set(None);
                        clear_remote.run(());
                    }
                />
                {move || error.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })}
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">
                    "We will email you a verification code to finish signing up"
                </p>

                {move || {
                    banner.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                }}

                <form class="auth-form" on:submit=submit>
                    {field("Full name", "text", name, name_error)}
                    {field("Email", "email", email, email_error)}
                    {field("Password", "password", password, password_error)}
                    {field("Confirm password", "password", confirm, confirm_error)}
                    {field("Phone (optional)", "tel", phone, RwSignal::new(None))}
                    {field("Specialization (optional)", "text", specialization, RwSignal::new(None))}
                    <button class="btn btn--primary" type="submit" prop:disabled=move || pending.get()>
                        {move || if pending.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <a href="/login">"Already have an account? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
