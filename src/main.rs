use std::time::Duration;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront::config::ServerConfig;
use storefront::db::{establish_connection_pool, run_migrations};
use storefront::repository::DieselRepository;
use storefront::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let secret_key = match &config.secret_key {
        Some(key) => Key::from(key.as_bytes()),
        None => {
            log::warn!("SECRET_KEY not set, sessions will not survive a restart");
            Key::generate()
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Connected to {}", config.database_url);

    match run_migrations(&pool) {
        Ok(applied) => log::info!("Applied {applied} pending migrations"),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let admin = web::Data::new(config.admin.clone());
    let session_ttl = Duration::from_secs(config.session_ttl_secs);
    let cookie_secure = config.cookie_secure;

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                IdentityMiddleware::builder()
                    .login_deadline(Some(session_ttl))
                    .build(),
            )
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(admin.clone())
            .configure(routes::configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
