pub mod app;
pub mod browse;
pub mod cache;
pub mod config;
pub mod detail;
pub mod error;
pub mod images;
pub mod language;
pub mod models;
pub mod pagination;
pub mod tmdb;
pub mod views;
