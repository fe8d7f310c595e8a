pub mod chat;
pub mod filter;
pub mod itinerary;
pub mod place;
pub mod session;
