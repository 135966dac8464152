use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed session-token payload: who it was issued to and for how long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}
