use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use courier_auth::config::JwtConfig;
use courier_auth::db::postgres_service::PostgresService;
use courier_auth::types::user::DBUserCreate;
use courier_auth::utils::{password, token::TokenIssuer};

pub const TEST_SECRET: &str = "test-secret-key-12345";

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    /// The issuer the test app runs with; tests use it to mint and inspect
    /// tokens out-of-band.
    pub fn issuer() -> TokenIssuer {
        TokenIssuer::new(&JwtConfig {
            secret: TEST_SECRET.to_string(),
            ttl_hours: 24,
        })
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Self::issuer()))
            .configure(courier_auth::routes::configure_routes)
    }

    /// Seed a user straight into the database and mint a session token for
    /// them, bypassing the HTTP flows.
    #[allow(dead_code)]
    pub async fn seed_user(&self, email: &str, plain_password: &str) -> (Uuid, String) {
        let password_hash = password::hash(plain_password).expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                first_name: "Seeded".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to seed user");

        let token = Self::issuer()
            .issue(user.id)
            .expect("Failed to issue token");

        (user.id, token)
    }
}
