pub mod postgres_service;
pub mod revocation;
pub mod user;
