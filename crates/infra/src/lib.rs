mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, Repos};
pub use services::{HttpEmailService, IEmailService, InMemoryEmailService, SentEmail};
use std::sync::Arc;
pub use system::ISys;
pub use system::{FixedTimeSys, RealSys};

/// Everything a use case needs to touch the outside world: repositories,
/// configuration, the clock and the email collaborator. Constructed once
/// per process and handed down, never reached through a global.
#[derive(Clone)]
pub struct WrenchContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub email: Arc<dyn IEmailService>,
}

struct ContextParams {
    pub mongodb_connection_string: String,
    pub mongodb_db_name: String,
}

impl WrenchContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_mongodb(
            &params.mongodb_connection_string,
            &params.mongodb_db_name,
        )
        .await
        .expect("Mongodb credentials must be set and valid");
        let config = Config::new();
        let email = Arc::new(HttpEmailService::new(
            config.email_api_url.clone(),
            config.email_api_key.clone(),
        ));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            email,
        }
    }

    /// In-process context for tests: in-memory repositories and a
    /// recording email service
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            email: Arc::new(InMemoryEmailService::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> WrenchContext {
    WrenchContext::create(ContextParams {
        mongodb_connection_string: get_mongodb_connection_string(),
        mongodb_db_name: get_mongodb_db_name(),
    })
    .await
}

fn get_mongodb_connection_string() -> String {
    const MONGODB_CONNECTION_STRING: &str = "MONGODB_URI";

    std::env::var(MONGODB_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", MONGODB_CONNECTION_STRING))
}

fn get_mongodb_db_name() -> String {
    std::env::var("MONGODB_DB_NAME").unwrap_or_else(|_| "wrench".into())
}
