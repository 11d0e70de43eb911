//! Email verification page: submits the six-digit code mailed to a pending
//! registration. Success behaves like login and lands on the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::Session;
use crate::pages::validate;

/// Seconds before the resend link becomes active again.
#[cfg(feature = "hydrate")]
const RESEND_COOLDOWN_SECS: u32 = 60;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.state();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = Signal::derive(move || query.get().get("email").unwrap_or_default());

    // Without a pending registration there is nothing to verify.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if email.get().is_empty() {
                navigate("/register", NavigateOptions::default());
            }
        }
    });

    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);
    let resent = RwSignal::new(false);
    let cooldown = RwSignal::new(0_u32);

    let pending = Signal::derive({
        let state = state.clone();
        move || state.get().is_loading()
    });
    let banner = Signal::derive({
        let state = state.clone();
        move || state.get().error().map(ToOwned::to_owned)
    });

    let on_code = {
        let session = session.clone();
        move |ev| {
            code.set(event_target_value(&ev));
            code_error.set(None);
            session.clear_error();
        }
    };

    let submit = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            code_error.set(validate::code(&code.get_untracked()));
            if code_error.get_untracked().is_some() {
                return;
            }
            let session = session.clone();
            let navigate = navigate.clone();
            let email = email.get_untracked();
            let code = code.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                if session.verify_code(&email, &code).await.is_ok() {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    let resend = {
        let session = session.clone();
        move |_| {
            if cooldown.get_untracked() > 0 {
                return;
            }
            resent.set(false);
            let session = session.clone();
            let email = email.get_untracked();
            leptos::task::spawn_local(async move {
                if session.resend_verification(&email).await.is_ok() {
                    resent.set(true);
                }
            });

            #[cfg(feature = "hydrate")]
            {
                cooldown.set(RESEND_COOLDOWN_SECS);
                leptos::task::spawn_local(async move {
                    while cooldown.get_untracked() > 0 {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                        cooldown.update(|c| *c = c.saturating_sub(1));
                    }
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Check your email"</h1>
                <p class="auth-card__subtitle">
                    "We sent a verification code to " <strong>{move || email.get()}</strong>
                </p>

                {move || {
                    banner.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                }}
                <Show when=move || resent.get()>
                    <div class="auth-card__notice">"A new code is on its way"</div>
                </Show>

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__field">
                        "Verification code"
                        <input
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            prop:value=move || code.get()
                            on:input=on_code
                        />
                        {move || {
                            code_error.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })
                        }}
                    </label>
                    <button class="btn btn--primary" type="submit" prop:disabled=move || pending.get()>
                        {move || if pending.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>

                <div class="auth-card__links">
                    <button class="btn btn--link" on:click=resend prop:disabled=move || cooldown.get() > 0>
                        {move || {
                            let left = cooldown.get();
                            if left > 0 {
                                format!("Resend code ({left}s)")
                            } else {
                                "Resend code".to_owned()
                            }
                        }}
                    </button>
                    <a href="/login">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
