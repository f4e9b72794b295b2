pub mod auth;
pub mod config;
pub mod database;
pub mod handlers;
pub mod menu;
pub mod models;
pub mod qr;
pub mod services;
pub mod state;
pub mod utils;
