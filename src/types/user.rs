use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// The user record as returned to callers. No password hash, ever.
#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserRes {
    pub fn from_model(user: entity::user::Model) -> Self {
        UserRes {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AuthRes {
    pub token: String,
    pub user: UserRes,
}

#[derive(Serialize, Deserialize)]
pub struct LogoutRes {
    pub message: String,
}
