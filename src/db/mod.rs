pub mod catalog_source;
pub mod plan_store;
