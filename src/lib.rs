pub mod config;
pub mod models;
pub mod routes;
pub mod scaffold;
pub mod sheets;
