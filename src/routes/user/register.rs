use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AuthRes, DBUserCreate, RUserRegister, UserRes};
use crate::utils::password;
use crate::utils::token::TokenIssuer;
use crate::utils::validate::{normalize_email, validate_register};

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    body: web::Json<RUserRegister>,
) -> ApiResult<AuthRes> {
    validate_register(&body)?;

    let password_hash = password::hash(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    // create_user fails with AlreadyExists when the email is taken.
    let user = db
        .create_user(DBUserCreate {
            first_name: body.first_name.trim().to_string(),
            last_name: body.last_name.trim().to_string(),
            email: normalize_email(&body.email),
            password_hash,
        })
        .await?;

    let token = issuer.issue(user.id)?;

    Ok(ApiResponse::Created(AuthRes {
        token,
        user: UserRes::from_model(user),
    }))
}
