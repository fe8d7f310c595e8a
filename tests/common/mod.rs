#![allow(dead_code)]

use actix_web::{web, App};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use travel_planner_api::app_state::AppState;
use travel_planner_api::configure_routes;
use travel_planner_api::db::catalog_source::read_catalog;
use travel_planner_api::db::plan_store::JsonFilePlanStore;

pub const TEST_CATALOG: &str = "\
State,City,Name,Type,Google review rating,Best Time to visit,Image URL
Goa,North Goa,Baga Beach,Beach,4.4,Winter,https://img.example.com/baga.jpg
Goa,North Goa,Aguada Fort,Fort,4.5,Winter,https://img.example.com/aguada.jpg
Goa,South Goa,Palolem Beach,Beach,4.6,Winter,https://img.example.com/palolem.jpg
Goa,North Goa,Calangute Beach,Beach,4.3,Summer,https://img.example.com/calangute.jpg
Rajasthan,Jaipur,Amber Fort,Fort,4.6,Winter,https://img.example.com/amber.jpg
Rajasthan,Jaipur,Hawa Mahal,Palace,4.4,Winter,https://img.example.com/hawa.jpg
Rajasthan,Udaipur,Lake Pichola,Lake,4.6,Monsoon,https://img.example.com/pichola.jpg
Kerala,Munnar,Eravikulam National Park,National Park,,Monsoon,https://img.example.com/eravikulam.jpg
";

pub struct TestApp {
    pub state: AppState,
    pub store_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store_path = dir.path().join("user_data.json");
        let catalog = read_catalog(TEST_CATALOG.as_bytes()).expect("Test catalog must parse");
        let state = AppState::new(catalog, JsonFilePlanStore::new(store_path.clone()));

        Self {
            state,
            store_path,
            _dir: dir,
        }
    }

    /// Seeds the plan store file with raw JSON before the app touches it.
    pub fn with_store_contents(self, raw: &str) -> Self {
        std::fs::write(&self.store_path, raw).expect("Failed to seed plan store");
        self
    }

    /// Points the plan store at `relative` inside the temp dir instead of the default file.
    pub fn with_store_path(mut self, relative: &str) -> Self {
        self.store_path = self._dir.path().join(relative);
        self.state = AppState {
            catalog: Arc::clone(&self.state.catalog),
            store: Arc::new(JsonFilePlanStore::new(self.store_path.clone())),
        };
        self
    }

    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(&self.store_path).unwrap_or_default()
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .configure(configure_routes)
    }
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}
