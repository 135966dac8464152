use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::revoked_token::{ActiveModel as RevokedActive, Column, Entity as RevokedToken};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl PostgresService {
    /// Blacklist a token. Idempotent: revoking an already revoked token
    /// leaves the original record in place.
    pub async fn revoke_token(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let insert = RevokedToken::insert(RevokedActive {
            token: Set(token.to_string()),
            expires_at: Set(expires_at),
            revoked_at: Set(Utc::now()),
        })
        .on_conflict(OnConflict::column(Column::Token).do_nothing().to_owned())
        .exec(&self.db)
        .await;

        match insert {
            Ok(_) => Ok(()),
            // on_conflict do_nothing surfaces as RecordNotInserted
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn token_revoked(&self, token: &str) -> Result<bool, AppError> {
        Ok(RevokedToken::find_by_id(token.to_string())
            .count(&self.db)
            .await?
            > 0)
    }

    /// Drop records whose token has passed its natural expiry; signature
    /// verification already rejects those tokens, so the rows are dead weight.
    pub async fn purge_expired_tokens(&self) -> Result<u64, AppError> {
        let res = RevokedToken::delete_many()
            .filter(Column::ExpiresAt.lt(Utc::now()))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
