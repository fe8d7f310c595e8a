use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;

use crate::app_state::AppState;
use crate::db::plan_store::StoreError;
use crate::middleware::identity_context::SignedInUser;
use crate::models::session::{AddPlaceRequest, AddPlaceResponse, ErrorBody};
use crate::services::itinerary_service::ItineraryManager;

fn store_failure(user: &SignedInUser, err: impl std::fmt::Display) -> HttpResponse {
    error!("Plan store failure for {}: {}", user.identity, err);
    HttpResponse::InternalServerError().json(ErrorBody::new("Failed to update day plans"))
}

/// Loads the caller's plan on the blocking pool, applies `action` and renders its result.
async fn run_on_plan<T, F>(state: &AppState, user: &SignedInUser, action: F) -> HttpResponse
where
    T: Serialize + Send + 'static,
    F: FnOnce(&mut ItineraryManager<'_>) -> Result<T, StoreError> + Send + 'static,
{
    let catalog = Arc::clone(&state.catalog);
    let store = Arc::clone(&state.store);
    let identity = user.identity.clone();

    let result = web::block(move || -> Result<T, StoreError> {
        let mut manager = ItineraryManager::load(&identity, &catalog, store.as_ref())?;
        action(&mut manager)
    })
    .await;

    match result {
        Ok(Ok(body)) => HttpResponse::Ok().json(body),
        Ok(Err(err)) => store_failure(user, err),
        Err(err) => store_failure(user, err),
    }
}

/*
    GET /api/plans
*/
pub async fn get_plans(state: web::Data<AppState>, user: SignedInUser) -> impl Responder {
    run_on_plan(&state, &user, |manager| Ok(manager.day_plans())).await
}

/*
    POST /api/plans/places
*/
pub async fn add_place(
    state: web::Data<AppState>,
    user: SignedInUser,
    input: web::Json<AddPlaceRequest>,
) -> impl Responder {
    let name = input.into_inner().name;
    run_on_plan(&state, &user, move |manager| {
        let outcome = manager.add_place(&name)?;
        Ok(AddPlaceResponse {
            outcome,
            plans: manager.day_plans(),
        })
    })
    .await
}

/*
    DELETE /api/plans/regions/{region}
*/
pub async fn remove_region(
    state: web::Data<AppState>,
    user: SignedInUser,
    path: web::Path<String>,
) -> impl Responder {
    let region = path.into_inner();
    run_on_plan(&state, &user, move |manager| {
        manager.remove_region(&region)?;
        Ok(manager.day_plans())
    })
    .await
}

/*
    DELETE /api/plans
*/
pub async fn clear_all(state: web::Data<AppState>, user: SignedInUser) -> impl Responder {
    run_on_plan(&state, &user, |manager| {
        manager.clear_all()?;
        Ok(manager.day_plans())
    })
    .await
}
