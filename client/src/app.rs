//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::token_provider::TokenProvider;
use crate::pages::{account::AccountPage, login::LoginPage, overview::OverviewPage, root::Root};

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
/// The token provider wraps the router so every route, including the login
/// screen, reads the same session signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mcdash.css"/>
        <Title text="MCDash"/>

        <TokenProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=Root>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("account") view=AccountPage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </TokenProvider>
    }
}
