pub mod account;
pub mod catalog;
pub mod chat;
pub mod health;
pub mod places;
pub mod plans;
