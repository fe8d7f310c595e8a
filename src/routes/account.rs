use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use crate::app_state::AppState;
use crate::models::session::{ErrorBody, SignInRequest, SignInResponse};
use crate::services::itinerary_service::ItineraryManager;

/*
    /api/auth/signin

    Identity is a bare label; nothing is verified. Returns the stored day plans,
    with any legacy flat list already grouped by region.
*/
pub async fn signin(state: web::Data<AppState>, input: web::Json<SignInRequest>) -> impl Responder {
    let identity = input.email.trim().to_string();
    if identity.is_empty() {
        return HttpResponse::BadRequest().json(ErrorBody::new("Please enter a valid email."));
    }

    let catalog = Arc::clone(&state.catalog);
    let store = Arc::clone(&state.store);
    let loaded = {
        let identity = identity.clone();
        web::block(move || {
            ItineraryManager::load(&identity, &catalog, store.as_ref())
                .map(|manager| manager.day_plans())
        })
        .await
    };

    match loaded {
        Ok(Ok(plans)) => {
            info!("Signed in as {}", identity);
            HttpResponse::Ok().json(SignInResponse { identity, plans })
        }
        Ok(Err(err)) => {
            error!("Failed to load plans for {}: {}", identity, err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to load day plans"))
        }
        Err(err) => {
            error!("Sign-in task for {} did not complete: {}", identity, err);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to load day plans"))
        }
    }
}
