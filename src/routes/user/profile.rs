use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::session;
use crate::utils::token::TokenIssuer;

#[get("/profile")]
async fn profile(
    req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
) -> ApiResult<UserRes> {
    let user = session::authenticate(&db, &issuer, &req).await?;
    Ok(ApiResponse::Ok(UserRes::from_model(user)))
}
