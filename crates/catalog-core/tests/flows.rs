//! End-to-end flows against an in-memory catalog backend

use async_trait::async_trait;
use catalog_core::workflow::{create_product, delete_and_refresh, load_products, update_and_refresh};
use catalog_core::{
    DashboardState, DraftField, Error, NoticeBoard, NoticeKind, Product, ProductApi, ProductDraft,
    ProductFormState, ProductId, Result,
};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List,
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

/// Backend that applies mutations to a Vec and records every call
#[derive(Default)]
struct RecordingApi {
    products: RefCell<Vec<Product>>,
    calls: RefCell<Vec<Call>>,
    next_id: RefCell<u32>,
    reject_with: RefCell<Option<Error>>,
}

impl RecordingApi {
    fn with_products(names: &[&str]) -> Self {
        let api = Self::default();
        for name in names {
            api.insert(ProductDraft {
                name: name.to_string(),
                description: format!("About {}", name),
                price: "10.00".into(),
            });
        }
        api
    }

    fn insert(&self, draft: ProductDraft) -> Product {
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        let product = Product {
            id: ProductId::new(next.to_string()),
            name: draft.name,
            description: draft.description,
            price: draft.price,
        };
        self.products.borrow_mut().push(product.clone());
        product
    }

    fn reject_mutations(&self, err: Error) {
        *self.reject_with.borrow_mut() = Some(err);
    }

    fn rejection(&self) -> Result<()> {
        match self.reject_with.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl ProductApi for RecordingApi {
    async fn list(&self) -> Result<Vec<Product>> {
        self.calls.borrow_mut().push(Call::List);
        Ok(self.products.borrow().clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product> {
        self.calls.borrow_mut().push(Call::Create(draft.clone()));
        self.rejection()?;
        Ok(self.insert(draft.clone()))
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id.clone(), draft.clone()));
        self.rejection()?;
        let mut products = self.products.borrow_mut();
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(Error::Server(404))?;
        product.name = draft.name.clone();
        product.description = draft.description.clone();
        product.price = draft.price.clone();
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        self.calls.borrow_mut().push(Call::Delete(id.clone()));
        self.rejection()?;
        self.products.borrow_mut().retain(|p| &p.id != id);
        Ok(())
    }
}

async fn mounted_dashboard(api: &RecordingApi) -> DashboardState {
    let mut state = DashboardState::new();
    let notices = state.finish_load(load_products(api).await);
    assert!(notices.is_empty());
    api.clear_calls();
    state
}

#[tokio::test]
async fn test_edit_update_issues_one_update_then_one_list() {
    let api = RecordingApi::with_products(&["Widget", "Gadget"]);
    let mut state = mounted_dashboard(&api).await;

    let gadget = state.products[1].clone();
    state.begin_edit(&gadget);
    state.edit_draft(DraftField::Name, "Gadget Mk II");

    let (id, draft) = state.update_request().unwrap();
    let outcome = update_and_refresh(&api, &id, &draft).await;
    let notices = state.finish_update(outcome);

    assert!(notices.is_empty());
    assert_eq!(
        api.calls(),
        vec![
            Call::Update(
                ProductId::new("2"),
                ProductDraft {
                    name: "Gadget Mk II".into(),
                    description: "About Gadget".into(),
                    price: "10.00".into(),
                }
            ),
            Call::List,
        ]
    );
    assert!(!state.is_editing());
    assert_eq!(state.products[1].name, "Gadget Mk II");
}

#[tokio::test]
async fn test_rejected_update_skips_refetch() {
    let api = RecordingApi::with_products(&["Widget"]);
    let mut state = mounted_dashboard(&api).await;
    api.reject_mutations(Error::Validation(vec![(
        "price".into(),
        vec!["A valid number is required.".into()],
    )]));

    let widget = state.products[0].clone();
    state.begin_edit(&widget);
    state.edit_draft(DraftField::Price, "");
    let (id, draft) = state.update_request().unwrap();
    let notices = state.finish_update(update_and_refresh(&api, &id, &draft).await);

    assert_eq!(api.calls().len(), 1);
    assert!(state.is_editing());
    assert_eq!(notices[0].message, "Error: price: A valid number is required.");
}

#[tokio::test]
async fn test_delete_then_cancel_makes_no_calls() {
    let api = RecordingApi::with_products(&["Widget", "Gadget"]);
    let mut state = mounted_dashboard(&api).await;

    state.begin_delete(ProductId::new("1"));
    state.cancel_delete();

    assert!(api.calls().is_empty());
    assert_eq!(state.visible_products().len(), 2);
}

#[tokio::test]
async fn test_delete_confirm_issues_one_delete_then_one_list() {
    let api = RecordingApi::with_products(&["Widget", "Gadget"]);
    let mut state = mounted_dashboard(&api).await;

    state.begin_delete(ProductId::new("1"));
    let id = state.confirm_delete().unwrap();
    let notices = state.finish_delete(delete_and_refresh(&api, &id).await);

    assert_eq!(api.calls(), vec![Call::Delete(ProductId::new("1")), Call::List]);
    let names: Vec<_> = state.visible_products().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Gadget"]);

    let mut board = NoticeBoard::new();
    for notice in notices {
        board.post(notice);
    }
    assert_eq!(board.current(NoticeKind::Success), Some("Product deleted successfully."));
    assert_eq!(board.current(NoticeKind::Error), None);
}

#[tokio::test]
async fn test_create_clears_form_and_success_notice_expires() {
    let api = RecordingApi::default();
    let mut form = ProductFormState::new();
    form.set_name("Widget");
    form.set_description("A widget");
    form.set_price("12.3");

    let draft = form.begin_submit().unwrap();
    let notice = form.finish_submit(create_product(&api, &draft).await);

    assert_eq!(
        api.calls(),
        vec![Call::Create(ProductDraft {
            name: "Widget".into(),
            description: "A widget".into(),
            price: "12.30".into(),
        })]
    );
    assert_eq!(form, ProductFormState::default());

    let mut board = NoticeBoard::new();
    let token = board.post(notice);
    assert_eq!(board.current(NoticeKind::Success), Some("Product added successfully!"));
    // what the dismissal timer does once it fires
    board.dismiss(NoticeKind::Success, token);
    assert!(board.is_empty());
}

#[tokio::test]
async fn test_failed_create_without_details_shows_fallback() {
    let api = RecordingApi::default();
    api.reject_mutations(Error::Server(500));
    let mut form = ProductFormState::new();
    form.set_name("Widget");
    form.set_description("A widget");
    form.set_price("3");

    let draft = form.begin_submit().unwrap();
    let notice = form.finish_submit(create_product(&api, &draft).await);

    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Error: An unexpected error occurred.");
    assert_eq!(form.name, "Widget");
}

#[tokio::test]
async fn test_invalid_price_never_reaches_the_server() {
    let api = RecordingApi::default();
    let mut form = ProductFormState::new();
    form.set_name("Widget");
    form.set_price(".");

    assert!(form.begin_submit().is_err());
    assert!(api.calls().is_empty());
}
