//! Request sequences behind each user action
//!
//! Mutations never patch local state: a successful update or delete is
//! always followed by a full re-read of the collection.

use tracing::{debug, warn};

use crate::api::ProductApi;
use crate::error::Result;
use crate::product::{Product, ProductDraft, ProductId};

/// Result of a mutation followed by a re-fetch
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Mutation accepted and the collection re-read
    Refreshed(Vec<Product>),
    /// Mutation accepted but the re-read failed
    RefreshFailed(crate::Error),
    /// Mutation rejected; no re-read was attempted
    Rejected(crate::Error),
}

pub async fn load_products<A: ProductApi + ?Sized>(api: &A) -> Result<Vec<Product>> {
    let result = api.list().await;
    match &result {
        Ok(products) => debug!("Loaded {} products", products.len()),
        Err(e) => warn!("Failed to load products: {}", e),
    }
    result
}

/// Create a product. The created entity is discarded; callers only care
/// whether the server accepted it.
pub async fn create_product<A: ProductApi + ?Sized>(api: &A, draft: &ProductDraft) -> Result<()> {
    match api.create(draft).await {
        Ok(created) => {
            debug!("Created product {}", created.id);
            Ok(())
        }
        Err(e) => {
            warn!("Failed to create product: {}", e);
            Err(e)
        }
    }
}

pub async fn update_and_refresh<A: ProductApi + ?Sized>(
    api: &A,
    id: &ProductId,
    draft: &ProductDraft,
) -> MutationOutcome {
    if let Err(e) = api.update(id, draft).await {
        warn!("Failed to update product {}: {}", id, e);
        return MutationOutcome::Rejected(e);
    }
    debug!("Updated product {}", id);
    refresh(api).await
}

pub async fn delete_and_refresh<A: ProductApi + ?Sized>(api: &A, id: &ProductId) -> MutationOutcome {
    if let Err(e) = api.delete(id).await {
        warn!("Failed to delete product {}: {}", id, e);
        return MutationOutcome::Rejected(e);
    }
    debug!("Deleted product {}", id);
    refresh(api).await
}

async fn refresh<A: ProductApi + ?Sized>(api: &A) -> MutationOutcome {
    match load_products(api).await {
        Ok(products) => MutationOutcome::Refreshed(products),
        Err(e) => MutationOutcome::RefreshFailed(e),
    }
}
