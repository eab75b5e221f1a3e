#![allow(dead_code)]

use std::cell::RefCell;

use tokio::sync::Notify;

use contact_list::domain::contact::NewContact;
use contact_list::domain::types::{ContactId, PageLimit};
use contact_list::dto::api::{ContactsQuery, ContactsResponse};
use contact_list::notifications::{NotificationKind, NotificationSink};
use contact_list::repository::errors::RepositoryResult;
use contact_list::repository::{ContactReader, ContactWriter, InMemoryRepository};
use contact_list::services::contacts::ContactsController;

/// Notification sink that remembers every message it received.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, NotificationKind)>>,
}

impl RecordingNotifier {
    pub fn take(&self) -> Vec<(String, NotificationKind)> {
        self.messages.take()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.messages.borrow_mut().push((message.to_string(), kind));
    }
}

/// In-memory backend whose list call for one page blocks until released.
pub struct GatedRepository {
    pub inner: InMemoryRepository,
    gated_page: u32,
    gate: Notify,
}

impl GatedRepository {
    pub fn new(inner: InMemoryRepository, gated_page: u32) -> Self {
        Self {
            inner,
            gated_page,
            gate: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

impl ContactReader for GatedRepository {
    async fn list_contacts(&self, query: ContactsQuery) -> RepositoryResult<ContactsResponse> {
        if query.page == self.gated_page {
            self.gate.notified().await;
        }
        self.inner.list_contacts(query).await
    }
}

impl ContactWriter for GatedRepository {
    async fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<()> {
        self.inner.create_contact(new_contact).await
    }

    async fn delete_contact(&self, id: &ContactId) -> RepositoryResult<()> {
        self.inner.delete_contact(id).await
    }
}

pub fn limit(value: u32) -> PageLimit {
    PageLimit::new(value).expect("valid limit")
}

pub fn controller(
    contacts: usize,
) -> ContactsController<InMemoryRepository, RecordingNotifier> {
    ContactsController::new(
        InMemoryRepository::seeded(contacts),
        RecordingNotifier::default(),
        limit(5),
    )
}
