//! Authentication gate for the Storefront API
//!
//! Two stages, always composed in this order in front of protected routes:
//! - token verification: validates the bearer token and attaches the
//!   decoded [`IdentityClaims`] to the request
//! - role guard: looks up the caller's stored role and rejects callers
//!   lacking the required privilege
//!
//! Routers opt in through [`RequireExt::require`]; handlers read the verified
//! identity with the [`VerifiedClaims`] extractor.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod guard;
mod jwt;
mod middleware;
mod types;

pub use backend::AuthBackend;
pub use claims::IdentityClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::VerifiedClaims;
pub use guard::{RequireExt, Requirement};
pub use middleware::{require_role, verify_token, RoleGuard};
pub use types::Role;
