//! Contacts backend kept in process memory.
//!
//! Mirrors the paging behaviour of the REST backend (`total_pages` is the
//! ceiling of `total / limit`, zero when empty) so it can stand in for it in
//! offline sessions and tests.

use std::cell::{Cell, RefCell};

use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::ContactId;
use crate::dto::api::{ContactsQuery, ContactsResponse};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactReader, ContactWriter};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: RefCell<Vec<Contact>>,
    next_id: Cell<u64>,
    list_calls: Cell<usize>,
    injected_failure: RefCell<Option<(u16, Option<String>)>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `count` generated contacts.
    pub fn seeded(count: usize) -> Self {
        let repo = Self::new();
        for n in 1..=count {
            repo.insert(NewContact::new(
                format!("Contact {n}"),
                format!("contact{n}@example.com"),
                format!("555-{n:04}"),
            ));
        }
        repo
    }

    fn insert(&self, new_contact: NewContact) -> ContactId {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        let id = ContactId::from_sequence(next);
        self.contacts
            .borrow_mut()
            .push(new_contact.into_contact(id.clone()));
        id
    }

    /// Makes the next backend call fail with `status` and an optional body
    /// message.
    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        self.injected_failure
            .replace(Some((status, message.map(str::to_string))));
    }

    fn take_failure(&self) -> RepositoryResult<()> {
        match self.injected_failure.borrow_mut().take() {
            Some((status, message)) => Err(RepositoryError::Status { status, message }),
            None => Ok(()),
        }
    }

    /// Number of list requests served so far, failed ones included.
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn len(&self) -> usize {
        self.contacts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.borrow().is_empty()
    }

    /// Identifiers in storage order.
    pub fn ids(&self) -> Vec<ContactId> {
        self.contacts
            .borrow()
            .iter()
            .map(|contact| contact.id.clone())
            .collect()
    }
}

impl ContactReader for InMemoryRepository {
    async fn list_contacts(&self, query: ContactsQuery) -> RepositoryResult<ContactsResponse> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.take_failure()?;

        let contacts = self.contacts.borrow();
        let limit = query.limit.get() as usize;
        let total = contacts.len();
        let total_pages = total.div_ceil(limit);
        let offset = (query.page.max(1) as usize - 1).saturating_mul(limit);

        let page = contacts.iter().skip(offset).take(limit).cloned().collect();

        Ok(ContactsResponse {
            contacts: page,
            total_pages: total_pages as u32,
            total: total as u64,
        })
    }
}

impl ContactWriter for InMemoryRepository {
    async fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<()> {
        self.take_failure()?;
        self.insert(new_contact.clone());
        Ok(())
    }

    async fn delete_contact(&self, id: &ContactId) -> RepositoryResult<()> {
        self.take_failure()?;

        let mut contacts = self.contacts.borrow_mut();
        let before = contacts.len();
        contacts.retain(|contact| &contact.id != id);
        if contacts.len() == before {
            return Err(RepositoryError::Status {
                status: 404,
                message: Some("Contact not found".to_string()),
            });
        }
        Ok(())
    }
}
