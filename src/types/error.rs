use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("User already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    // Deliberately the same message for an unknown email and a wrong
    // password; callers must not be able to tell which one happened.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorsBody<'a> {
    errors: &'a [FieldError],
}

impl AppError {
    fn message(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "User already exists",
            Self::NotFound => "Not found",
            Self::Validation(_) => "Validation failed",
            Self::InvalidCredentials => "Invalid email or password",
            Self::Unauthorized => "Unauthorized",
            // opaque to the caller
            Self::Db(_) | Self::Internal(_) => "Internal server error",
        }
    }
    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(ErrorsBody { errors })
            }
            _ => HttpResponse::build(self.status_code()).json(MessageBody {
                message: self.message(),
            }),
        }
    }
}
