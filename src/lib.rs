pub mod api;
pub mod bookings;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod navbar;
pub mod notice;
pub mod selection;
pub mod utils;
