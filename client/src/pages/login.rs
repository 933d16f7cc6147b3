//! Login page: exchanges username + password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::token::TokenState;
use crate::util::gate::HOME_PATH;

const MISSING_INPUT_MESSAGE: &str = "Enter both username and password.";

/// Trim the username and require both fields.
///
/// Passwords are passed through untouched; surrounding spaces may be part of them.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login route. Sends an already signed-in visitor straight to the overview.
#[component]
pub fn LoginPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    view! {
        <Show when=move || token.get().is_valid() fallback=|| view! { <LoginForm/> }>
            <Redirect path=HOME_PATH/>
        </Show>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        // A valid session flips `LoginPage` over to its redirect branch.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(issued) => {
                    crate::util::token_storage::write(&issued);
                    token.update(|s| s.sign_in(issued));
                }
                Err(e) => {
                    info.set(e);
                    password.set(String::new());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, token);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MCDash"</h1>
                <p class="login-card__subtitle">"Sign in to manage your server"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
