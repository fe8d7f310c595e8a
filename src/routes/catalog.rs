use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::models::filter::ALL;

#[derive(Deserialize)]
pub struct CategoryParams {
    locality: Option<String>,
}

/*
    /api/catalog/regions
*/
pub async fn get_regions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.regions())
}

/*
    /api/catalog/regions/{region}/localities
*/
pub async fn get_localities(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.localities_with_sentinel(&path.into_inner()))
}

/*
    /api/catalog/regions/{region}/categories?locality=
*/
pub async fn get_categories(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<CategoryParams>,
) -> impl Responder {
    let locality = params
        .locality
        .as_deref()
        .filter(|l| !l.is_empty() && *l != ALL);
    HttpResponse::Ok().json(
        state
            .catalog
            .categories_with_sentinel(&path.into_inner(), locality),
    )
}

/*
    /api/catalog/seasons
*/
pub async fn get_seasons(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.seasons_with_sentinel())
}
