use serde::{Deserialize, Serialize};

use super::itinerary::DayPlans;
use crate::services::itinerary_service::AddOutcome;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub identity: String,
    pub plans: DayPlans,
}

#[derive(Debug, Deserialize)]
pub struct AddPlaceRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AddPlaceResponse {
    pub outcome: AddOutcome,
    pub plans: DayPlans,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
