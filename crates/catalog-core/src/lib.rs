//! Core of the product catalog admin interface
//!
//! Everything here is target independent so it can be exercised on the host:
//! - Product model and the price entry rules
//! - Name search over the in-memory collection
//! - Per-screen view state (`DashboardState`, `ProductFormState`)
//! - Debounced notices keyed by kind
//! - The `ProductApi` contract and the request workflows built on it

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod notice;
pub mod price;
pub mod product;
pub mod search;
pub mod workflow;

pub use api::{Endpoints, ProductApi};
pub use config::Config;
pub use dashboard::{DashboardState, DraftField, EditSession};
pub use error::{Error, Result};
pub use form::{FormPhase, ProductFormState};
pub use notice::{Notice, NoticeBoard, NoticeKind, NoticeToken};
pub use product::{Product, ProductDraft, ProductId};
pub use workflow::MutationOutcome;
