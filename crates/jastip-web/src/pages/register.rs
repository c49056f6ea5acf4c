//! Register Page

use jastip_client::HttpAuthApi;
use jastip_core::{PasswordVisibility, RegisterController, RegisterForm, SubmitState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ErrorPanel, PasswordField, TextField};
use crate::routing::RouterNavigator;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
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

            let form = RegisterForm {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            };
            let api = api.clone();
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                let outcome = RegisterController::new(&api, &navigator).submit(&form).await;
                state.update(|s| s.settle(outcome));
            });
        }
    };

    let back_to_login = move |_| RegisterController::new(&api, &navigator).back_to_login();

    view! {
        <div class="auth-page">
            <button class="back-link" on:click=back_to_login.clone()>"← Back to Login"</button>

            <div class="auth-card">
                <h1>"Register"</h1>

                <ErrorPanel state=state />

                <form class="auth-form" on:submit=on_submit>
                    <TextField id="username" label="Username" placeholder="johndoe" value=username />
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
                    <PasswordField
                        id="confirmPassword"
                        label="Confirm Password"
                        value=confirm_password
                        visibility=visibility
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(SubmitState::is_loading)
                    >
                        {move || {
                            if state.with(SubmitState::is_loading) {
                                "Creating Account..."
                            } else {
                                "Join JSON"
                            }
                        }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"Already have an account?"</p>
                    <button class="btn" on:click=back_to_login>"Login Instead"</button>
                </div>
            </div>
        </div>
    }
}
