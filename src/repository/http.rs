//! Contacts backend reached over HTTP.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::domain::contact::NewContact;
use crate::domain::types::ContactId;
use crate::dto::api::{ContactsQuery, ContactsResponse, ErrorResponse};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactReader, ContactWriter};

/// REST client for the `contacts` / `contact` endpoints under a base URL.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    base_url: Url,
    client: Client,
}

impl HttpRepository {
    /// Builds a client rooted at `base_url`; request timeouts are enforced by
    /// the HTTP client itself.
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Transport(format!("Failed to build http client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET contacts?page={page}&limit={limit}`
    fn list_request(&self, query: &ContactsQuery) -> RepositoryResult<RequestBuilder> {
        let url = self.base_url.join("contacts")?;
        Ok(self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json"))
    }

    /// `POST contact`
    pub fn create_url(&self) -> RepositoryResult<Url> {
        Ok(self.base_url.join("contact")?)
    }

    /// `DELETE contact/{id}`
    pub fn delete_url(&self, id: &ContactId) -> RepositoryResult<Url> {
        let mut url = self.base_url.join("contact")?;
        url.path_segments_mut()
            .map_err(|_| {
                RepositoryError::ValidationError(format!(
                    "Base url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .push(id.as_str());
        Ok(url)
    }
}

/// Parses the configured base URL, appending the trailing slash that
/// [`Url::join`] needs to keep the last path segment.
fn normalize_base_url(raw: &str) -> RepositoryResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::ValidationError(
            "Base url cannot be empty".to_string(),
        ));
    }

    let url = if trimmed.ends_with('/') {
        Url::parse(trimmed)?
    } else {
        Url::parse(&format!("{trimmed}/"))?
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RepositoryError::ValidationError(format!(
            "Unsupported url scheme: {other}"
        ))),
    }
}

/// Passes the response through when it carries `expected`, otherwise turns it
/// into a status error with the backend's message.
async fn expect_status(rsp: Response, expected: StatusCode) -> RepositoryResult<Response> {
    let status = rsp.status();
    if status == expected {
        return Ok(rsp);
    }

    let body = rsp.text().await.unwrap_or_default();
    Err(RepositoryError::status(
        status,
        ErrorResponse::message_from_body(&body),
    ))
}

impl ContactReader for HttpRepository {
    async fn list_contacts(&self, query: ContactsQuery) -> RepositoryResult<ContactsResponse> {
        log::debug!("GET contacts page {} limit {}", query.page, query.limit);

        let rsp = self.list_request(&query)?.send().await?;
        let rsp = expect_status(rsp, StatusCode::OK).await?;

        let body = rsp.text().await?;
        let data = serde_json::from_str::<ContactsResponse>(&body)?;
        Ok(data)
    }
}

impl ContactWriter for HttpRepository {
    async fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<()> {
        let url = self.create_url()?;
        log::debug!("POST {url}");

        let rsp = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(new_contact)
            .send()
            .await?;
        expect_status(rsp, StatusCode::CREATED).await?;

        Ok(())
    }

    async fn delete_contact(&self, id: &ContactId) -> RepositoryResult<()> {
        let url = self.delete_url(id)?;
        log::debug!("DELETE {url}");

        let rsp = self
            .client
            .delete(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        expect_status(rsp, StatusCode::OK).await?;

        Ok(())
    }
}
