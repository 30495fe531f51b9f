//! JWT claims types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity claim carried by an access token.
///
/// `email` is the only field the gate trusts for authorization decisions.
/// Anything else the caller put in the payload at sign-in is preserved in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Caller identifier
    pub email: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Remaining payload fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
