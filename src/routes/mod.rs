use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user")
            .service(user::register::register)
            .service(user::login::login)
            .service(user::profile::profile)
            .service(user::logout::logout),
    );
}
