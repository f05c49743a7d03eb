pub mod app;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod types;
