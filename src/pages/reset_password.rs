//! Password reset confirmation page: email + mailed code + new password.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::auth::Session;
use crate::net::types::PasswordResetRequest;
use crate::pages::validate;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let email_error = RwSignal::new(None::<&'static str>);
    let code_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

    let submitting = RwSignal::new(false);
    let done = RwSignal::new(false);

    // Prefill the address when we arrive from the request step.
    Effect::new(move || {
        if let Some(address) = query.get().get("email") {
            if !address.is_empty() && email.get_untracked().is_empty() {
                email.set(address);
            }
        }
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
        email_error.set(validate::email(&email.get_untracked()));
        code_error.set(validate::code(&code.get_untracked()));
        password_error.set(validate::new_password(&password.get_untracked()));
        confirm_error.set(validate::password_confirmation(
            &password.get_untracked(),
            &confirm.get_untracked(),
        ));
        if email_error.get_untracked().is_some()
            || code_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || confirm_error.get_untracked().is_some()
            || submitting.get_untracked()
        {
            return;
        }
        submitting.set(true);
        let session = session.clone();
        let req = PasswordResetRequest {
            email: email.get_untracked().trim().to_owned(),
            code: code.get_untracked().trim().to_owned(),
            new_password: password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            let result = session.confirm_password_reset(&req).await;
            submitting.set(false);
            if result.is_ok() {
                done.set(true);
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
                <Show
                    when=move || done.get()
                    fallback=move || {
                        let submit = submit.clone();
                        view! {
                            <h1 class="auth-card__title">"Choose a new password"</h1>
                            <p class="auth-card__subtitle">
                                "Enter the reset code from your email"
                            </p>

                            {move || {
                                banner.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                            }}

                            <form class="auth-form" on:submit=submit>
                                {field("Email", "email", email, email_error)}
                                {field("Reset code", "text", code, code_error)}
                                {field("New password", "password", password, password_error)}
                                {field("Confirm new password", "password", confirm, confirm_error)}
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    prop:disabled=move || submitting.get()
                                >
                                    {move || {
                                        if submitting.get() { "Resetting..." } else { "Reset password" }
                                    }}
                                </button>
                            </form>

                            <div class="auth-card__links">
                                <a href="/login">"Back to sign in"</a>
                            </div>
                        }
                    }
                >
                    <h1 class="auth-card__title">"Password updated"</h1>
                    <p class="auth-card__subtitle">"You can sign in with your new password now"</p>
                    <div class="auth-card__links">
                        <a class="btn btn--primary" href="/login">"Go to sign in"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
