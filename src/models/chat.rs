use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Destination {
    pub name: &'static str,
    pub best_time: &'static str,
    pub speciality: &'static str,
    pub famous_food: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
