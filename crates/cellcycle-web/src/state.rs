//! Shared application state for the web server.

use std::sync::Arc;

use cellcycle_db::Database;
use cellcycle_reports::{DirResources, ReportService};
use tracing::info;

use crate::config::Config;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(db: Database, reports: ReportService) -> Self {
        Self { db, reports }
    }

    /// Reports are served from `resources.root` on disk.
    pub fn from_config(config: &Config, db: Database) -> Self {
        let store = DirResources::new(&config.resources.root);
        info!(root = %store.root().display(), "serving report resources");
        let reports = ReportService::new(Arc::new(store), config.resources.report_paths());
        Self::new(db, reports)
    }
}

pub type SharedState = Arc<AppState>;
