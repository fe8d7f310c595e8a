pub mod catalog_service;
pub mod chatbot_service;
pub mod itinerary_service;
pub mod link_service;
