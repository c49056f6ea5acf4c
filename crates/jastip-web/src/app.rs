//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{HomePage, LoginPage, RegisterPage, StatusPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/status") view=StatusPage />
                </Routes>
            </main>
        </Router>
    }
}
