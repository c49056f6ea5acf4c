//! Home Page

use jastip_core::HomeController;
use jastip_core::navigation::{DASHBOARD, LOGIN};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routing::RouterNavigator;
use crate::storage::LocalStorageTokenStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let home = HomeController::mount(&LocalStorageTokenStore);
    let navigator = RouterNavigator::new(use_navigate());
    let menu_open = RwSignal::new(false);

    let (account_href, account_label) = if home.is_authenticated() {
        (DASHBOARD, "Dashboard")
    } else {
        (LOGIN, "Masuk")
    };

    let explore = move |_| home.explore(&navigator);

    view! {
        <div class="home">
            <nav class="navbar">
                <a href="/" class="brand">"JSON"</a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <ul class="nav-links" class:open=move || menu_open.get()>
                    <li><a href="#features">"Fitur"</a></li>
                    <li><a href="#how-it-works">"Cara Kerja"</a></li>
                    <li><a href=account_href>{account_label}</a></li>
                </ul>
            </nav>

            <header class="hero">
                <span class="badge">"JSON"</span>
                <h1>"Jastip Online Nasional"</h1>
                <p class="tagline">
                    "Titip belanja dari kota mana pun di Indonesia lewat traveler terpercaya."
                </p>
                <div class="cta">
                    <button class="btn btn-primary" on:click=explore>"Explore Now"</button>
                </div>
            </header>

            <section id="features" class="features">
                <div class="feature">
                    <h3>"Aman & Terpercaya"</h3>
                    <p>"Dana ditahan lewat Rekber sampai barang titipan sampai di tanganmu."</p>
                </div>
                <div class="feature">
                    <h3>"Jangkauan Luas"</h3>
                    <p>"Traveler dari berbagai kota siap membelikan produk lokal favoritmu."</p>
                </div>
                <div class="feature">
                    <h3>"Proses Cepat"</h3>
                    <p>"Pesan, konfirmasi, dan lacak titipan dalam hitungan menit."</p>
                </div>
            </section>

            <section id="how-it-works" class="steps">
                <h2>"Cara Kerja"</h2>
                <ol>
                    <li>"Buat permintaan titip beserta detail barang."</li>
                    <li>"Traveler menerima dan membelikan barangmu."</li>
                    <li>"Bayar aman lewat Rekber, barang dikirim ke alamatmu."</li>
                </ol>
            </section>

            <footer class="footer">
                <p>"JSON · Jastip Online Nasional"</p>
            </footer>
        </div>
    }
}
