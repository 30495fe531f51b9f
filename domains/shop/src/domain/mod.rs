//! Domain layer for the Shop domain

pub mod entities;
