use serde::{Deserialize, Serialize};

/// One row of the place catalog. Never mutated after load.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Place {
    #[serde(rename(deserialize = "Name"))]
    pub name: String,
    #[serde(rename(deserialize = "State"))]
    pub region: String,
    #[serde(rename(deserialize = "City"))]
    pub locality: String,
    #[serde(rename(deserialize = "Type"))]
    pub category: String,
    #[serde(
        rename(deserialize = "Google review rating"),
        deserialize_with = "csv::invalid_option"
    )]
    pub rating: Option<f32>,
    #[serde(rename(deserialize = "Best Time to visit"))]
    pub recommended_season: String,
    #[serde(rename(deserialize = "Image URL"))]
    pub image_reference: String,
}

/// A place as handed to the front end, with its search links attached.
#[derive(Debug, Serialize, Clone)]
pub struct PlaceCard {
    #[serde(flatten)]
    pub place: Place,
    pub directions_link: String,
    pub food_link: String,
}

#[derive(Debug, Serialize)]
pub struct PlaceListing {
    pub heading: String,
    pub fallback: bool,
    pub places: Vec<PlaceCard>,
}
