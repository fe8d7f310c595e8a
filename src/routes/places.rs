use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::app_state::AppState;
use crate::models::filter::{FilterQuery, FilterSelection};
use crate::models::place::{PlaceCard, PlaceListing};
use crate::models::session::ErrorBody;
use crate::services::link_service::to_card;

/*
    /api/places?region=&locality=&category=&season=
*/
pub async fn get_places(
    state: web::Data<AppState>,
    params: web::Query<FilterQuery>,
) -> impl Responder {
    let catalog = &state.catalog;
    let regions = catalog.regions();
    let Some(default_region) = regions.first() else {
        return HttpResponse::Ok().json(PlaceListing {
            heading: String::new(),
            fallback: false,
            places: Vec::new(),
        });
    };

    let selection = FilterSelection::from_query(params.into_inner(), default_region);
    let matched = catalog.filter_selection(&selection);

    // No match falls back to every place in the region.
    let (fallback, places) = if matched.is_empty() {
        debug!("No places match {:?}, showing whole region", selection);
        (true, catalog.in_region(&selection.region))
    } else {
        (false, matched)
    };

    HttpResponse::Ok().json(PlaceListing {
        heading: selection.heading().to_string(),
        fallback,
        places: places.into_iter().map(to_card).collect::<Vec<PlaceCard>>(),
    })
}

/*
    /api/places/{name}
*/
pub async fn get_place(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.find(&path.into_inner()) {
        Some(place) => HttpResponse::Ok().json(to_card(place)),
        None => HttpResponse::NotFound().json(ErrorBody::new("Place not found")),
    }
}
