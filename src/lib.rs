use crate::models::config::ClientConfig;
use crate::notifications::TerminalNotifier;
use crate::repository::{Backend, HttpRepository, InMemoryRepository};
use crate::services::contacts::ContactsController;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod notifications;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod shell;

pub const DEFAULT_API_BASE_URL: &str = "https://contact-list-backend-5qqv.onrender.com/api/";
pub const DEFAULT_PAGE_LIMIT: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Contacts generated for an offline session.
pub const OFFLINE_SEED_CONTACTS: usize = 12;

/// Builds the contacts backend from the configuration and runs the terminal
/// shell until the user quits.
pub async fn run(config: ClientConfig) -> std::io::Result<()> {
    let backend = if config.offline {
        log::info!("Offline mode, serving {OFFLINE_SEED_CONTACTS} generated contacts");
        Backend::InMemory(InMemoryRepository::seeded(OFFLINE_SEED_CONTACTS))
    } else {
        let repo = HttpRepository::new(&config.api_base_url, config.request_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to set up contacts API: {e}")))?;
        log::info!("Using contacts API at {}", repo.base_url());
        Backend::Http(repo)
    };

    let controller = ContactsController::new(backend, TerminalNotifier, config.page_limit);

    shell::run_shell(&controller).await
}
