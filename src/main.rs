use std::env;
use std::path::Path;

use dotenvy::dotenv;

use contact_list::models::config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let client_config = match ClientConfig::load(Path::new("config"), &app_env) {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    contact_list::run(client_config).await
}
