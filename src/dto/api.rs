//! Request and response bodies exchanged with the contacts backend.

use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;
use crate::domain::types::PageLimit;

/// Query string of `GET contacts`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ContactsQuery {
    pub page: u32,
    pub limit: PageLimit,
}

impl ContactsQuery {
    pub fn new(page: u32, limit: PageLimit) -> Self {
        Self { page, limit }
    }
}

/// Body of a successful `GET contacts` response.
///
/// Missing fields fall back to an empty page so a partial body never poisons
/// the local window.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactsResponse {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

/// Error body optionally returned alongside a failing status.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extracts a user-facing message from a raw error body, if any.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}
