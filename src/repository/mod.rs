use crate::{
    domain::{contact::NewContact, types::ContactId},
    dto::api::{ContactsQuery, ContactsResponse},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod http;
pub mod memory;

pub use http::HttpRepository;
pub use memory::InMemoryRepository;

/// Read side of the contacts backend.
#[allow(async_fn_in_trait)]
pub trait ContactReader {
    async fn list_contacts(&self, query: ContactsQuery) -> RepositoryResult<ContactsResponse>;
}

/// Write side of the contacts backend.
#[allow(async_fn_in_trait)]
pub trait ContactWriter {
    async fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<()>;
    async fn delete_contact(&self, id: &ContactId) -> RepositoryResult<()>;
}

/// Backend selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum Backend {
    Http(HttpRepository),
    InMemory(InMemoryRepository),
}

impl ContactReader for Backend {
    async fn list_contacts(&self, query: ContactsQuery) -> RepositoryResult<ContactsResponse> {
        match self {
            Backend::Http(repo) => repo.list_contacts(query).await,
            Backend::InMemory(repo) => repo.list_contacts(query).await,
        }
    }
}

impl ContactWriter for Backend {
    async fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<()> {
        match self {
            Backend::Http(repo) => repo.create_contact(new_contact).await,
            Backend::InMemory(repo) => repo.create_contact(new_contact).await,
        }
    }

    async fn delete_contact(&self, id: &ContactId) -> RepositoryResult<()> {
        match self {
            Backend::Http(repo) => repo.delete_contact(id).await,
            Backend::InMemory(repo) => repo.delete_contact(id).await,
        }
    }
}
