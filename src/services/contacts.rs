//! Contact list controller.
//!
//! [`ContactsController`] owns the page window, the contacts of the current
//! page, the loading flag and the add-contact form. All mutation goes through
//! its methods; none of them holds a borrow of the state across an `.await`, so
//! page requests may overlap. Each fetch is tagged with a sequence number and
//! only the most recently issued one may commit its response.

use std::cell::RefCell;

use serde::Serialize;

use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::{ContactId, PageLimit};
use crate::dto::api::ContactsQuery;
use crate::forms::contact::{AddContactForm, ContactField};
use crate::notifications::{NotificationKind, NotificationSink};
use crate::pagination::{PageCheck, PageWindow};
use crate::repository::{ContactReader, ContactWriter};
use crate::services::ServiceResult;

pub const FETCH_ERROR_MESSAGE: &str = "Error fetching contacts";
pub const CREATE_SUCCESS_MESSAGE: &str = "Contact added successfully";
pub const CREATE_ERROR_MESSAGE: &str = "Error adding contact";
pub const DELETE_SUCCESS_MESSAGE: &str = "Contact deleted successfully";
pub const DELETE_ERROR_MESSAGE: &str = "Error deleting contact";

/// What a page request ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The backend answered and the page is now displayed.
    Loaded { page: u32 },
    /// The page was out of bounds; the window moved locally without a fetch.
    Clamped { page: u32 },
    /// A newer request was issued while this one was in flight; its response
    /// was dropped.
    Superseded,
}

/// Read-only copy of the controller state for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct ContactsView {
    pub contacts: Vec<Contact>,
    pub window: PageWindow,
    pub loading: bool,
    pub form: AddContactForm,
}

#[derive(Debug)]
struct ContactsState {
    window: PageWindow,
    contacts: Vec<Contact>,
    loading: bool,
    form: AddContactForm,
    /// Sequence number of the most recently issued list request.
    latest_request: u64,
}

pub struct ContactsController<R, N> {
    repo: R,
    notifier: N,
    state: RefCell<ContactsState>,
}

impl<R, N> ContactsController<R, N>
where
    R: ContactReader + ContactWriter,
    N: NotificationSink,
{
    pub fn new(repo: R, notifier: N, limit: PageLimit) -> Self {
        Self {
            repo,
            notifier,
            state: RefCell::new(ContactsState {
                window: PageWindow::new(limit),
                contacts: Vec::new(),
                loading: false,
                form: AddContactForm::default(),
                latest_request: 0,
            }),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> ContactsView {
        let state = self.state.borrow();
        ContactsView {
            contacts: state.contacts.clone(),
            window: state.window,
            loading: state.loading,
            form: state.form.clone(),
        }
    }

    pub fn window(&self) -> PageWindow {
        self.state.borrow().window
    }

    pub fn page(&self) -> u32 {
        self.state.borrow().window.page()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.state.borrow().contacts.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn form(&self) -> AddContactForm {
        self.state.borrow().form.clone()
    }

    /// Shows `requested`, fetching it from the backend when it is in bounds.
    ///
    /// Out-of-bounds pages are clamped without a network call and leave the
    /// displayed contacts untouched. A failed fetch keeps the previous page,
    /// totals and contacts and notifies the user.
    pub async fn request_page(&self, requested: u32) -> ServiceResult<FetchOutcome> {
        let (page, limit, ticket) = {
            let mut state = self.state.borrow_mut();
            match state.window.check(requested) {
                PageCheck::Clamp(page) => {
                    log::debug!("Page {requested} out of bounds, clamping to {page}");
                    state.window.set_page(page);
                    return Ok(FetchOutcome::Clamped { page });
                }
                PageCheck::Fetch(page) => {
                    state.latest_request += 1;
                    state.loading = true;
                    (page, state.window.limit(), state.latest_request)
                }
            }
        };

        log::debug!("Requesting page {page} (request #{ticket})");
        let result = self
            .repo
            .list_contacts(ContactsQuery::new(page, limit))
            .await;

        let mut state = self.state.borrow_mut();
        if ticket != state.latest_request {
            log::debug!(
                "Dropping response for page {page}: request #{ticket} superseded by #{}",
                state.latest_request
            );
            return Ok(FetchOutcome::Superseded);
        }
        state.loading = false;

        match result {
            Ok(response) => {
                state
                    .window
                    .commit(page, response.total_pages, response.total);
                state.contacts = response.contacts;
                Ok(FetchOutcome::Loaded { page })
            }
            Err(err) => {
                drop(state);
                log::error!("Fetch contacts error: {err}");
                self.notifier
                    .notify(FETCH_ERROR_MESSAGE, NotificationKind::Error);
                Err(err.into())
            }
        }
    }

    /// Re-requests the current page.
    pub async fn refresh(&self) -> ServiceResult<FetchOutcome> {
        let page = self.page();
        self.request_page(page).await
    }

    /// Moves one page forward; `None` when already on the last page.
    pub async fn next_page(&self) -> Option<ServiceResult<FetchOutcome>> {
        let next = {
            let state = self.state.borrow();
            if !state.window.has_next() {
                return None;
            }
            state.window.page() + 1
        };
        Some(self.request_page(next).await)
    }

    /// Moves one page back; `None` when already on the first page.
    pub async fn previous_page(&self) -> Option<ServiceResult<FetchOutcome>> {
        let previous = {
            let state = self.state.borrow();
            if !state.window.has_previous() {
                return None;
            }
            state.window.page() - 1
        };
        Some(self.request_page(previous).await)
    }

    pub fn toggle_form(&self) {
        self.state.borrow_mut().form.toggle();
    }

    pub fn set_form_field(&self, field: ContactField, value: impl Into<String>) {
        self.state.borrow_mut().form.set(field, value);
    }

    /// Submits the add-contact form as typed.
    pub async fn submit_form(&self) -> ServiceResult<()> {
        let new_contact = NewContact::from(&self.state.borrow().form);
        self.create(&new_contact).await
    }

    /// Creates a contact; on success the form is cleared and closed and the
    /// current page reloaded.
    pub async fn create(&self, new_contact: &NewContact) -> ServiceResult<()> {
        match self.repo.create_contact(new_contact).await {
            Ok(()) => {
                self.state.borrow_mut().form.reset();
                self.notifier
                    .notify(CREATE_SUCCESS_MESSAGE, NotificationKind::Success);
                let page = self.page();
                self.reload(page).await;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to add contact: {err}");
                self.notifier.notify(
                    &err.user_message(CREATE_ERROR_MESSAGE),
                    NotificationKind::Error,
                );
                Err(err.into())
            }
        }
    }

    /// Deletes a contact and reloads the view.
    ///
    /// When the displayed page held only this contact the view steps back one
    /// page (never below the first) instead of reloading the emptied page.
    pub async fn remove(&self, id: &ContactId) -> ServiceResult<()> {
        let emptied = self.state.borrow().contacts.len() == 1;

        match self.repo.delete_contact(id).await {
            Ok(()) => {
                if emptied {
                    let target = {
                        let mut state = self.state.borrow_mut();
                        let target = state.window.page_after_emptied();
                        state.window.set_page(target);
                        target
                    };
                    log::info!("Last contact on page deleted, showing page {target}");
                    self.reload(target).await;
                } else {
                    self.notifier
                        .notify(DELETE_SUCCESS_MESSAGE, NotificationKind::Success);
                    let page = self.page();
                    self.reload(page).await;
                }
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to delete contact {id}: {err}");
                self.notifier.notify(
                    &err.user_message(DELETE_ERROR_MESSAGE),
                    NotificationKind::Error,
                );
                Err(err.into())
            }
        }
    }

    /// Follow-up fetch after a mutation; its failures are already reported by
    /// [`Self::request_page`].
    async fn reload(&self, page: u32) {
        if let Err(err) = self.request_page(page).await {
            log::debug!("Reload of page {page} failed: {err}");
        }
    }
}
