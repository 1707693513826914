pub mod config;
pub mod cors;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod store;
pub mod validation;
