use url::form_urlencoded::byte_serialize;

use crate::models::place::{Place, PlaceCard};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";
const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Form-encodes a query the way search boxes expect (spaces become `+`).
fn encode(query: &str) -> String {
    byte_serialize(query.as_bytes()).collect()
}

pub fn directions_link(place: &Place) -> String {
    let query = format!("{} {} {}", place.name, place.locality, place.region);
    format!("{}{}", MAPS_DIRECTIONS_URL, encode(&query))
}

pub fn food_link(place: &Place) -> String {
    let query = format!(
        "famous or affordable food near {} {} {}",
        place.name, place.locality, place.region
    );
    format!("{}{}", MAPS_SEARCH_URL, encode(&query))
}

/// Map search for a bare place name, used on schedule entries.
pub fn place_search_link(name: &str) -> String {
    format!("{}?api=1&query={}", MAPS_SEARCH_URL, encode(name))
}

pub fn to_card(place: &Place) -> PlaceCard {
    PlaceCard {
        place: place.clone(),
        directions_link: directions_link(place),
        food_link: food_link(place),
    }
}
