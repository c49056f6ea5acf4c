//! Login Page

use jastip_client::HttpAuthApi;
use jastip_core::{LoginController, LoginForm, PasswordVisibility, SubmitState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ErrorPanel, PasswordField, TextField};
use crate::routing::RouterNavigator;
use crate::storage::LocalStorageTokenStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let visibility = RwSignal::new(PasswordVisibility::default());
    let state = RwSignal::new(SubmitState::default());

    let api = HttpAuthApi::from_build_env();
    let navigator = RouterNavigator::new(use_navigate());

    let on_submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !state.try_update(SubmitState::begin).unwrap_or(false) {
                return;
            }

            let form = LoginForm::new(email.get_untracked(), password.get_untracked());
            let api = api.clone();
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                let outcome = LoginController::new(&api, &LocalStorageTokenStore, &navigator)
                    .submit(&form)
                    .await;
                state.update(|s| s.settle(outcome));
            });
        }
    };

    let back_home = {
        let api = api.clone();
        let navigator = navigator.clone();
        move |_| LoginController::new(&api, &LocalStorageTokenStore, &navigator).back_home()
    };

    let create_account =
        move |_| LoginController::new(&api, &LocalStorageTokenStore, &navigator).create_account();

    view! {
        <div class="auth-page">
            <button class="back-link" on:click=back_home>"← Back to Home"</button>

            <div class="auth-card">
                <h1>"Login"</h1>

                <ErrorPanel state=state />

                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        id="email"
                        label="Email Address"
                        kind="email"
                        placeholder="you@example.com"
                        value=email
                    />
                    <PasswordField
                        id="password"
                        label="Password"
                        value=password
                        visibility=visibility
                        toggle=true
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(SubmitState::is_loading)
                    >
                        {move || {
                            if state.with(SubmitState::is_loading) { "Logging in..." } else { "Enter JSON" }
                        }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"New to JSON?"</p>
                    <button class="btn" on:click=create_account>"Create an Account"</button>
                </div>
            </div>
        </div>
    }
}
