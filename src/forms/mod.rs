//! Form state backing the add-contact dialog.

use thiserror::Error;

pub mod contact;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form input.
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
