//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    find_id::FindIdPage, find_password::FindPasswordPage, home::HomePage, list::ListPage,
    login::LoginPage, reset_password::ResetPasswordPage, signup::SignupPage, write::WritePage,
};
use crate::state::{auth::AuthState, entries::EntriesState};

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
/// Provides the shared state contexts and sets up routing. The `.html`
/// route names are kept from the original static site so bookmarked URLs
/// and the gate's pending destinations stay valid.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let entries = RwSignal::new(EntriesState::default());

    provide_context(auth);
    provide_context(entries);

    view! {
        <Stylesheet id="leptos" href="/pkg/mydiary.css"/>
        <Title text="My Diary"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("index.html") view=HomePage/>
                <Route path=StaticSegment("login.html") view=LoginPage/>
                <Route path=StaticSegment("signup.html") view=SignupPage/>
                <Route path=StaticSegment("list.html") view=ListPage/>
                <Route path=StaticSegment("write.html") view=WritePage/>
                <Route path=StaticSegment("find-id.html") view=FindIdPage/>
                <Route path=StaticSegment("find-password.html") view=FindPasswordPage/>
                <Route path=StaticSegment("reset-password.html") view=ResetPasswordPage/>
            </Routes>
        </Router>
    }
}
