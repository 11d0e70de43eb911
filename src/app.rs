//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::Session;
use crate::components::quick_search::SearchEntry;
use crate::components::route_guard::{GuestOnly, RequireAuth};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage,
    register::RegisterPage, reset_password::ResetPasswordPage, verify_email::VerifyEmailPage,
};
use crate::state::ui::UiState;
use crate::util::browser;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session manager, provides the shared contexts, restores any
/// persisted session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new_browser();
    provide_context(session.clone());

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(RwSignal::new(Vec::<SearchEntry>::new()));

    // A rejected token anywhere ends the session with a hard redirect; the
    // router may be mid-transition, so client navigation is not enough.
    session.set_unauthorized_handler(|| browser::redirect("/login"));

    // Runs once on the client: restore appearance, then the session.
    Effect::new(move || {
        let dark = browser::read_dark_preference();
        browser::apply_dark(dark);
        ui.update(|u| u.dark_mode = dark);
        session.bootstrap();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/classdesk.css"/>
        <Title text="ClassDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestOnly><RegisterPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("verify-email")
                    view=|| view! { <GuestOnly><VerifyEmailPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <GuestOnly><ForgotPasswordPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <GuestOnly><ResetPasswordPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
