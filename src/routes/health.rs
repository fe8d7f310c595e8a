use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::db::plan_store::{PlanStore, StoreError};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
    checked_at: DateTime<Utc>,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_result = check_catalog(&state);
    let store = Arc::clone(&state.store);
    let store_result = web::block(move || check_plan_store(store.as_ref()))
        .await
        .unwrap_or_else(|err| ServiceStatus {
            status: "error".to_string(),
            details: Some(err.to_string()),
        });

    let status = if catalog_result.status != "ok" || store_result.status != "ok" {
        "degraded"
    } else {
        "ok"
    };

    let mut services = HashMap::new();
    services.insert("catalog".to_string(), catalog_result);
    services.insert("plan_store".to_string(), store_result);

    HttpResponse::Ok().json(HealthStatus {
        status: status.to_string(),
        services,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checked_at: Utc::now(),
    })
}

fn check_catalog(state: &AppState) -> ServiceStatus {
    if state.catalog.is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Catalog has no places".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} places loaded", state.catalog.len())),
        }
    }
}

fn check_plan_store(store: &dyn PlanStore) -> ServiceStatus {
    match store.load_all() {
        Ok(plans) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} saved plans", plans.len())),
        },
        Err(StoreError::Corrupt(err)) => ServiceStatus {
            status: "degraded".to_string(),
            details: Some(format!("Store unreadable, plans will start empty: {}", err)),
        },
        Err(err) => ServiceStatus {
            status: "error".to_string(),
            details: Some(err.to_string()),
        },
    }
}
