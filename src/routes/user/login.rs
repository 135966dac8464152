use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::{AuthRes, RUserLogin, UserRes};
use crate::utils::password;
use crate::utils::session::SESSION_COOKIE;
use crate::utils::token::TokenIssuer;
use crate::utils::validate::{normalize_email, validate_login};

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    body: web::Json<RUserLogin>,
) -> Result<HttpResponse, AppError> {
    validate_login(&body)?;

    // Unknown email and wrong password collapse into one answer.
    let user = match db.get_user_by_email(&normalize_email(&body.email)).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::InvalidCredentials),
        Err(e) => return Err(e),
    };

    let matches = password::compare(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))?;
    if !matches {
        return Err(AppError::InvalidCredentials);
    }

    let token = issuer.issue(user.id)?;

    let cookie = Cookie::build(SESSION_COOKIE, token.clone())
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(AuthRes {
        token,
        user: UserRes::from_model(user),
    }))
}
