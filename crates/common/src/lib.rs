//! Shared utilities, configuration, and error handling for Storefront
//!
//! - Configuration loaded from the environment
//! - The common error type and its HTTP rendering
//! - Extractors whose rejections render through the common error type

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::{JsonBody, PathParam, ValidatedJson, ValidatedJsonRejection};
