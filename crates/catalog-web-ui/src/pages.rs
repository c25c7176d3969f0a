//! Page Components
//!
//! One component per route.

use catalog_core::workflow;
use catalog_core::{Config, DashboardState, Product, ProductId};
use leptos::*;
use tracing::warn;

use crate::api::HttpProductApi;
use crate::components::*;
use crate::notices::{NoticeBanners, Notices};

/// Landing page - marketing chrome around the create form
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <section class="home-main">
                <img src="/product.png" class="hero-image" alt="Product"/>
                <ProductForm class="home-form"/>
                <img src="/product.png" class="hero-image" alt="Product"/>
            </section>
            <Footer/>
        </div>
    }
}

/// Products dashboard - search, edit and delete
#[component]
pub fn ProductDashboard() -> impl IntoView {
    let api = store_value(expect_context::<HttpProductApi>());
    let config = expect_context::<Config>();
    let notices = Notices::new(config.notice_duration_ms);
    let state = create_rw_signal(DashboardState::new());

    // Recomputed whenever the collection or the search term changes
    let visible = create_memo(move |_| state.with(|s| s.visible_products()));

    // Load products on mount
    create_effect(move |_| {
        spawn_local(async move {
            let api = api.get_value();
            let result = workflow::load_products(&api).await;
            if let Some(found) = state.try_update(|s| s.finish_load(result)) {
                notices.post_all(found);
            }
        });
    });

    let on_edit = Callback::new(move |product: Product| state.update(|s| s.begin_edit(&product)));
    let on_delete = Callback::new(move |id: ProductId| state.update(|s| s.begin_delete(id)));
    let cancel_edit = Callback::new(move |_: ()| state.update(|s| s.cancel_edit()));
    let cancel_delete = Callback::new(move |_: ()| state.update(|s| s.cancel_delete()));

    let submit_update = Callback::new(move |_: ()| {
        let Some((id, draft)) = state.with_untracked(|s| s.update_request()) else {
            return;
        };
        spawn_local(async move {
            let api = api.get_value();
            let outcome = workflow::update_and_refresh(&api, &id, &draft).await;
            if let Some(found) = state.try_update(|s| s.finish_update(outcome)) {
                notices.post_all(found);
            }
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = state.try_update(|s| s.confirm_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let api = api.get_value();
            let outcome = workflow::delete_and_refresh(&api, &id).await;
            if let Some(found) = state.try_update(|s| s.finish_delete(outcome)) {
                notices.post_all(found);
            }
        });
    });

    let go_back = move |_| {
        if let Err(e) = window().history().and_then(|h| h.back()) {
            warn!("History back failed: {:?}", e);
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-bar">
                <button class="back-button" title="Back" on:click=go_back>"←"</button>
            </div>
            <div class="dashboard-header">
                <h2>"Product Dashboard"</h2>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search products..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
            </div>

            <section class="dashboard-main">
                <NoticeBanners notices=notices/>
                <div class="products-grid">
                    {move || visible.get().into_iter().map(|product| view! {
                        <ProductCard product=product on_edit=on_edit on_delete=on_delete/>
                    }).collect_view()}
                </div>
            </section>

            <Show when=move || state.with(|s| s.is_confirming_delete())>
                <ConfirmDeleteModal on_confirm=confirm_delete on_cancel=cancel_delete/>
            </Show>

            <Show when=move || state.with(|s| s.is_editing())>
                <EditProductModal state=state on_update=submit_update on_cancel=cancel_edit/>
            </Show>
        </div>
    }
}
