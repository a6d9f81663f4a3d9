pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use services::Workbench;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub workbench: Workbench,
}

impl AppState {
    pub fn new(workbench: Workbench) -> Self {
        Self { workbench }
    }
}
