use std::sync::Arc;

use crate::db::plan_store::PlanStore;
use crate::services::catalog_service::PlaceCatalog;

/// Shared by every worker: the read-only catalog and the plan store handle.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlaceCatalog>,
    pub store: Arc<dyn PlanStore>,
}

impl AppState {
    pub fn new(catalog: PlaceCatalog, store: impl PlanStore + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
        }
    }
}
