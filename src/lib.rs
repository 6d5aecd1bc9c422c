pub mod auth;
pub mod configuration;
pub mod db;
pub mod errors;
pub mod forms;
mod middleware;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;
