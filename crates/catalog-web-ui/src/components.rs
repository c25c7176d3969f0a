//! Reusable UI Components
//!
//! Leptos components shared by the landing page and the dashboard.

use catalog_core::workflow;
use catalog_core::{Config, DashboardState, DraftField, Notice, Product, ProductFormState, ProductId};
use chrono::Datelike;
use leptos::*;
use leptos_router::*;
use web_sys::HtmlInputElement;

use crate::api::HttpProductApi;
use crate::notices::{NoticeBanners, Notices};

/// Landing page header with the link to the dashboard
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <h1>"Product Management"</h1>
                <nav class="header-nav">
                    <A href="/products" class="nav-button">"📦 All Products"</A>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <p>"© " {year} " Product Management. All rights reserved."</p>
            <div class="footer-links">
                <a href="#" title="Home">"🏠"</a>
                <a href="#" title="About">"ℹ️"</a>
                <a href="#" title="Contact">"✉️"</a>
            </div>
        </footer>
    }
}

/// Create-product form
///
/// Owns its own field state and notices; clears itself after the server
/// accepts the product.
#[component]
pub fn ProductForm(#[prop(optional, into)] class: String) -> impl IntoView {
    let api = store_value(expect_context::<HttpProductApi>());
    let config = expect_context::<Config>();
    let notices = Notices::new(config.notice_duration_ms);
    let form = create_rw_signal(ProductFormState::new());

    let on_price_input = move |ev: ev::Event| {
        let candidate = event_target_value(&ev);
        let accepted = form.try_update(|f| f.set_price(&candidate)).unwrap_or(false);
        if !accepted {
            // the signal did not change, so put the DOM value back by hand
            let input = event_target::<HtmlInputElement>(&ev);
            input.set_value(&form.with_untracked(|f| f.price.clone()));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                notices.post(Notice::error(e.display_message()));
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let api = api.get_value();
            let result = workflow::create_product(&api, &draft).await;
            if let Some(notice) = form.try_update(|f| f.finish_submit(result)) {
                notices.post(notice);
            }
        });
    };

    view! {
        <div class=format!("product-form {}", class)>
            <NoticeBanners notices=notices/>

            <h2 class="form-title">"📦 Add New Product"</h2>
            <form class="form-fields" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    required=true
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Description"
                    required=true
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Price"
                    required=true
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=on_price_input
                />
                <button type="submit" class="btn btn-primary">"Add Product"</button>
            </form>
        </div>
    }
}

/// One product in the dashboard grid
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<ProductId>,
) -> impl IntoView {
    let id = product.id.clone();
    let name = product.name.clone();
    let description = product.description.clone();
    let price = format!("${}", product.price);

    view! {
        <div class="product-card">
            <h3 class="product-name">{name}</h3>
            <p class="product-description">{description}</p>
            <p class="product-price">{price}</p>
            <div class="product-actions">
                <button class="btn btn-edit" on:click=move |_| on_edit.call(product.clone())>
                    "Edit"
                </button>
                <button class="btn btn-delete" on:click=move |_| on_delete.call(id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Centered dialog; clicking the backdrop closes it
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.call(())>
            <div class="modal-content" role="dialog" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ConfirmDeleteModal(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal on_close=on_cancel>
            <h2>"Confirm Deletion"</h2>
            <p>"Are you sure you want to delete this product?"</p>
            <div class="modal-actions">
                <button class="btn btn-delete" on:click=move |_| on_confirm.call(())>"Yes, Delete"</button>
                <button class="btn btn-cancel" on:click=move |_| on_cancel.call(())>"Cancel"</button>
            </div>
        </Modal>
    }
}

/// Edit dialog bound to the dashboard's staged draft
#[component]
pub fn EditProductModal(
    state: RwSignal<DashboardState>,
    #[prop(into)] on_update: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let value = move |field: DraftField| move || state.with(|s| s.draft_field(field).to_string());
    let set = move |field: DraftField| {
        move |ev: ev::Event| state.update(|s| s.edit_draft(field, event_target_value(&ev)))
    };

    view! {
        <Modal on_close=on_cancel>
            <h2>"Edit Product"</h2>
            <div class="form-fields">
                <label for="edit-name">"Name"</label>
                <input
                    id="edit-name"
                    type="text"
                    placeholder="Enter product name"
                    prop:value=value(DraftField::Name)
                    on:input=set(DraftField::Name)
                />
                <label for="edit-description">"Description"</label>
                <textarea
                    id="edit-description"
                    placeholder="Enter product description"
                    prop:value=value(DraftField::Description)
                    on:input=set(DraftField::Description)
                />
                <label for="edit-price">"Price"</label>
                <input
                    id="edit-price"
                    type="number"
                    step="0.01"
                    placeholder="Enter product price"
                    prop:value=value(DraftField::Price)
                    on:input=set(DraftField::Price)
                />
                <div class="modal-actions">
                    <button class="btn btn-edit" on:click=move |_| on_update.call(())>"Update"</button>
                    <button class="btn btn-cancel" on:click=move |_| on_cancel.call(())>"Cancel"</button>
                </div>
            </div>
        </Modal>
    }
}
