pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod export;
pub mod model;
pub mod models;
pub mod routes;
pub mod site;
pub mod utils;
pub mod views;
