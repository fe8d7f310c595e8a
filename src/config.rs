use std::env;
use std::path::PathBuf;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const CATALOG_PATH: &str = "data/places.csv";
const PLAN_STORE_PATH: &str = "user_data.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub plan_store_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(PORT);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port,
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| CATALOG_PATH.to_string())
                .into(),
            plan_store_path: env::var("PLAN_STORE_PATH")
                .unwrap_or_else(|_| PLAN_STORE_PATH.to_string())
                .into(),
        }
    }
}
