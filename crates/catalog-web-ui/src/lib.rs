//! Product catalog admin frontend
//!
//! Leptos CSR application compiled to WebAssembly:
//! - `/` landing page with the create-product form
//! - `/products` dashboard with search, edit and delete

use catalog_core::Config;
use leptos::*;
use leptos_router::*;

mod api;
mod components;
mod notices;
mod pages;

pub use api::*;
pub use components::*;
pub use notices::*;
pub use pages::*;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = Config::default().with_api_base(option_env!("CATALOG_API_BASE"));
    tracing::info!("Using catalog API at {}", config.api_base);

    provide_context(HttpProductApi::new(&config.api_base));
    provide_context(config);

    view! {
        <Router>
            <main class="app-container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/products" view=ProductDashboard/>
                </Routes>
            </main>
        </Router>
    }
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
