use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, web, HttpResponse};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::LogoutRes;
use crate::utils::session::{self, SESSION_COOKIE};
use crate::utils::token::{self, TokenIssuer};

#[get("/logout")]
async fn logout(
    req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
) -> Result<HttpResponse, AppError> {
    // No-op when the caller never sent a token.
    if let Some(token) = session::extract_token(&req) {
        // Tokens we cannot read still get blacklisted for a full lifetime.
        let expires_at = token::decode_expiry(&token)
            .unwrap_or_else(|| Utc::now() + Duration::hours(issuer.ttl_hours()));
        db.revoke_token(&token, expires_at).await?;
    }

    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok().cookie(cookie).json(LogoutRes {
        message: "Logged out successfully".to_string(),
    }))
}
