//! UI Components

use jastip_core::{PasswordVisibility, SubmitState};
use leptos::prelude::*;

/// Error panel shown above a form while its last submission failed
#[component]
pub fn ErrorPanel(state: RwSignal<SubmitState>) -> impl IntoView {
    let message = move || state.with(|s| s.error().map(str::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <div class="error-panel" role="alert">{move || message().unwrap_or_default()}</div>
        </Show>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=kind
                required=true
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input whose masking follows a shared visibility toggle
///
/// Only fields with `toggle` set render the show/hide button.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    visibility: RwSignal<PasswordVisibility>,
    #[prop(optional)] toggle: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <div class="password-input">
                <input
                    id=id
                    name=id
                    type=move || visibility.get().input_type()
                    required=true
                    placeholder="••••••••"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <Show when=move || toggle>
                    <button
                        type="button"
                        class="password-toggle"
                        on:click=move |_| visibility.update(|v| *v = v.toggle())
                    >
                        {move || if visibility.get().is_visible() { "Hide" } else { "Show" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
