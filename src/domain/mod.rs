//! Domain aggregates exposed by the contact list service layer.

pub mod contact;
pub mod types;
