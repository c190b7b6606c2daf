//! SeaORM storage gateways.

pub mod entity;
pub mod mapper;
pub mod repo;
pub mod schema;

pub use schema::bootstrap_schema;
