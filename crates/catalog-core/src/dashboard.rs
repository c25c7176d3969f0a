//! Dashboard view state
//!
//! One serializable struct holds everything the products screen tracks:
//! the loaded collection, the search term, and whichever modal flow is
//! staged. Transitions are plain methods; anything that needs the network
//! hands back the request to make, and the matching `finish_*` method
//! folds the response back in and says which notices to show.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notice::Notice;
use crate::product::{Product, ProductDraft, ProductId};
use crate::search::filter_by_name;
use crate::workflow::MutationOutcome;

pub const DELETED_MESSAGE: &str = "Product deleted successfully.";

/// Product open in the edit modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSession {
    pub id: ProductId,
    pub draft: ProductDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Last successful full-collection fetch
    pub products: Vec<Product>,
    pub search: String,
    pub editing: Option<EditSession>,
    /// Id waiting on the delete confirmation
    pub pending_delete: Option<ProductId>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products matching the current search term
    pub fn visible_products(&self) -> Vec<Product> {
        filter_by_name(&self.products, &self.search)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn finish_load(&mut self, result: Result<Vec<Product>>) -> Vec<Notice> {
        match result {
            Ok(products) => {
                self.products = products;
                Vec::new()
            }
            Err(e) => vec![Notice::error(e.display_message())],
        }
    }

    // Edit flow

    pub fn begin_edit(&mut self, product: &Product) {
        self.editing = Some(EditSession {
            id: product.id.clone(),
            draft: product.draft(),
        });
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            let value = value.into();
            match field {
                DraftField::Name => session.draft.name = value,
                DraftField::Description => session.draft.description = value,
                DraftField::Price => session.draft.price = value,
            }
        }
    }

    /// Current draft value of `field`, empty when no edit is open
    pub fn draft_field(&self, field: DraftField) -> &str {
        match self.editing.as_ref() {
            Some(session) => match field {
                DraftField::Name => &session.draft.name,
                DraftField::Description => &session.draft.description,
                DraftField::Price => &session.draft.price,
            },
            None => "",
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The update call to make for the open draft, if any
    pub fn update_request(&self) -> Option<(ProductId, ProductDraft)> {
        self.editing
            .as_ref()
            .map(|session| (session.id.clone(), session.draft.clone()))
    }

    /// A rejected update leaves the modal open; anything else closes it.
    pub fn finish_update(&mut self, outcome: MutationOutcome) -> Vec<Notice> {
        match outcome {
            MutationOutcome::Refreshed(products) => {
                self.editing = None;
                self.products = products;
                Vec::new()
            }
            MutationOutcome::RefreshFailed(e) => {
                self.editing = None;
                vec![Notice::error(e.display_message())]
            }
            MutationOutcome::Rejected(e) => vec![Notice::error(e.display_message())],
        }
    }

    // Delete flow

    pub fn begin_delete(&mut self, id: ProductId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Close the confirmation and hand back the id to delete.
    pub fn confirm_delete(&mut self) -> Option<ProductId> {
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, outcome: MutationOutcome) -> Vec<Notice> {
        match outcome {
            MutationOutcome::Refreshed(products) => {
                self.products = products;
                vec![Notice::success(DELETED_MESSAGE)]
            }
            MutationOutcome::RefreshFailed(e) => vec![
                Notice::error(e.display_message()),
                Notice::success(DELETED_MESSAGE),
            ],
            MutationOutcome::Rejected(e) => vec![Notice::error(e.display_message())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::notice::NoticeKind;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            description: format!("About {}", name),
            price: "9.99".into(),
        }
    }

    fn loaded() -> DashboardState {
        let mut state = DashboardState::new();
        state.finish_load(Ok(vec![
            product("1", "Widget"),
            product("2", "Gadget"),
            product("3", "Widge-Pro"),
        ]));
        state
    }

    #[test]
    fn test_visible_products_follow_search_and_collection() {
        let mut state = loaded();
        state.set_search("WIDG");
        let names: Vec<_> = state.visible_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Widget", "Widge-Pro"]);

        state.finish_load(Ok(vec![product("4", "Widgetron")]));
        let names: Vec<_> = state.visible_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Widgetron"]);

        state.set_search("");
        assert_eq!(state.visible_products().len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_collection() {
        let mut state = loaded();
        let notices = state.finish_load(Err(Error::transport("offline")));
        assert_eq!(state.products.len(), 3);
        assert_eq!(notices, vec![Notice::error("Error: An unexpected error occurred.")]);
    }

    #[test]
    fn test_edit_stages_draft_and_cancel_discards() {
        let mut state = loaded();
        let widget = state.products[0].clone();
        state.begin_edit(&widget);
        state.edit_draft(DraftField::Name, "Widget 2");

        let (id, draft) = state.update_request().unwrap();
        assert_eq!(id, ProductId::new("1"));
        assert_eq!(draft.name, "Widget 2");
        assert_eq!(draft.description, "About Widget");
        assert_eq!(draft.price, "9.99");
        assert_eq!(state.draft_field(DraftField::Name), "Widget 2");
        // the collection itself is untouched until the server answers
        assert_eq!(state.products[0].name, "Widget");

        state.cancel_edit();
        assert!(!state.is_editing());
        assert!(state.update_request().is_none());
    }

    #[test]
    fn test_edit_draft_without_session_is_ignored() {
        let mut state = loaded();
        state.edit_draft(DraftField::Price, "1.00");
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_rejected_update_keeps_modal_open() {
        let mut state = loaded();
        let widget = state.products[0].clone();
        state.begin_edit(&widget);

        let rejected = Error::Validation(vec![("name".into(), vec!["Too long.".into()])]);
        let notices = state.finish_update(MutationOutcome::Rejected(rejected));

        assert!(state.is_editing());
        assert_eq!(notices, vec![Notice::error("Error: name: Too long.")]);
    }

    #[test]
    fn test_successful_update_closes_modal_and_replaces_collection() {
        let mut state = loaded();
        let widget = state.products[0].clone();
        state.begin_edit(&widget);

        let notices = state.finish_update(MutationOutcome::Refreshed(vec![product("1", "Widget 2")]));
        assert!(notices.is_empty());
        assert!(!state.is_editing());
        assert_eq!(state.products, vec![product("1", "Widget 2")]);
    }

    #[test]
    fn test_delete_cancel_clears_staged_id() {
        let mut state = loaded();
        state.begin_delete(ProductId::new("2"));
        assert!(state.is_confirming_delete());

        state.cancel_delete();
        assert!(!state.is_confirming_delete());
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn test_delete_confirm_closes_modal_even_on_failure() {
        let mut state = loaded();
        state.begin_delete(ProductId::new("2"));
        assert_eq!(state.confirm_delete(), Some(ProductId::new("2")));
        assert!(!state.is_confirming_delete());

        let notices = state.finish_delete(MutationOutcome::Rejected(Error::Server(500)));
        assert!(!state.is_confirming_delete());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_delete_success_notice() {
        let mut state = loaded();
        state.begin_delete(ProductId::new("2"));
        state.confirm_delete();

        let notices = state.finish_delete(MutationOutcome::Refreshed(vec![
            product("1", "Widget"),
            product("3", "Widge-Pro"),
        ]));
        assert_eq!(notices, vec![Notice::success(DELETED_MESSAGE)]);
        assert!(state.products.iter().all(|p| p.id != ProductId::new("2")));
    }

    #[test]
    fn test_state_is_serializable() {
        let mut state = loaded();
        state.set_search("gad");
        state.begin_delete(ProductId::new("2"));

        let json = serde_json::to_string(&state).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
