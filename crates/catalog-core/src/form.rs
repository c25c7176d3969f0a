//! Create-product form state
//!
//! `Idle -> Editing -> Submitting -> Idle` on success, back to `Editing` on
//! failure. Only the price field has an input guard; there is no cross-field
//! validation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notice::Notice;
use crate::price::{accept_price_input, normalize_price};
use crate::product::ProductDraft;

pub const CREATED_MESSAGE: &str = "Product added successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFormState {
    pub name: String,
    pub description: String,
    pub price: String,
    pub phase: FormPhase,
}

impl ProductFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Apply a price keystroke. Returns false when the candidate was
    /// rejected and the previous value kept.
    pub fn set_price(&mut self, candidate: &str) -> bool {
        let accepted = accept_price_input(&self.price, candidate);
        let changed = accepted == candidate;
        self.price = accepted;
        if changed {
            self.touch();
        }
        changed
    }

    /// Build the create payload with the price normalized to two decimals.
    /// An unparseable price is reported without leaving the editing phase.
    pub fn begin_submit(&mut self) -> Result<ProductDraft> {
        match normalize_price(&self.price) {
            Ok(price) => {
                self.phase = FormPhase::Submitting;
                Ok(ProductDraft {
                    name: self.name.clone(),
                    description: self.description.clone(),
                    price,
                })
            }
            Err(e) => {
                self.phase = FormPhase::Editing;
                Err(e)
            }
        }
    }

    /// Fold the create response back in and return the notice to show.
    pub fn finish_submit(&mut self, result: Result<()>) -> Notice {
        match result {
            Ok(()) => {
                *self = Self::default();
                Notice::success(CREATED_MESSAGE)
            }
            Err(e) => {
                self.phase = FormPhase::Editing;
                Notice::error(e.display_message())
            }
        }
    }

    fn touch(&mut self) {
        if self.phase == FormPhase::Idle {
            self.phase = FormPhase::Editing;
        }
    }
}
