mod config;
mod store;
mod users_routes;
mod workflows;

use std::sync::OnceLock;

use axum::Router;
use tracing_subscriber::EnvFilter;
use types::{Result, err};

pub use crate::config::Config;
pub use crate::store::RosterStore;
pub use crate::users_routes::{ApiError, users_router};
pub use crate::workflows::WorkflowClient;

/// Everything the server functions and routes share.
#[derive(Clone)]
pub struct AppState {
    pub roster: RosterStore,
    pub workflows: WorkflowClient,
}

static STATE: OnceLock<AppState> = OnceLock::new();

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Another subscriber may already be installed by the dev server.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration, seed the roster and build the extra routes to merge
/// next to the app router. Safe to call again: later calls reuse the state.
pub async fn init() -> Result<Router> {
    if let Some(state) = STATE.get() {
        return Ok(users_router(state.roster.clone()));
    }

    let config = Config::load()?;

    let roster = match &config.roster_seed {
        Some(path) => RosterStore::from_seed_file(path).await?,
        None => RosterStore::seeded()?,
    };
    tracing::info!(users = roster.len().await, "roster loaded");

    let workflows = WorkflowClient::new(config.workflow_api_url, config.workflow_api_key);

    let state = STATE.get_or_init(|| AppState { roster, workflows });
    Ok(users_router(state.roster.clone()))
}

pub fn state() -> Result<&'static AppState> {
    STATE.get().ok_or_else(|| err!("server state is not initialized"))
}
