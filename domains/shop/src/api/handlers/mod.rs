//! HTTP handlers for the Shop domain

pub mod auth;
pub mod carts;
pub mod products;
pub mod reviews;
pub mod users;
