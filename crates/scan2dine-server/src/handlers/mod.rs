pub mod auth;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod pages;
pub mod public_menu;
pub mod qr;
pub mod restaurant;
