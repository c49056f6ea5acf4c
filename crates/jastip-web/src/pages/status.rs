//! Backend Status Page
//!
//! Connectivity smoke test: fetches the greeting once on mount.

use jastip_client::HttpAuthApi;
use jastip_core::check_backend;
use leptos::prelude::*;

#[component]
pub fn StatusPage() -> impl IntoView {
    let message = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        let api = HttpAuthApi::from_build_env();
        let text = check_backend(&api).await;
        message.update(|m| *m = text);
    });

    view! {
        <div class="status">
            <h1>"Backend Status"</h1>
            <p>"Message from Backend: " <strong>{move || message.get()}</strong></p>
        </div>
    }
}
