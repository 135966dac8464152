use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::TokenIssuer;
use entity::user::Model as UserModel;

pub const SESSION_COOKIE: &str = "token";

/// Carrier policy: the session cookie wins, the bearer header is the
/// fallback. Returns None when neither is present.
pub fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// The gate every protected route goes through. Short-circuits on the first
/// failure: no token, blacklisted token, bad signature/expiry, unknown user.
/// A token that verifies but sits on the blacklist is still refused.
pub async fn authenticate(
    db: &PostgresService,
    issuer: &TokenIssuer,
    req: &HttpRequest,
) -> Result<UserModel, AppError> {
    let token = extract_token(req).ok_or(AppError::Unauthorized)?;

    if db.token_revoked(&token).await? {
        return Err(AppError::Unauthorized);
    }

    let claims = issuer.verify(&token)?;

    // The account may have gone away between issuance and use.
    match db.get_user_by_id(&claims.sub).await {
        Ok(user) => Ok(user),
        Err(AppError::NotFound) => Err(AppError::Unauthorized),
        Err(e) => Err(e),
    }
}
