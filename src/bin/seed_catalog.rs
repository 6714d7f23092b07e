//! Fill an empty database with the sample storefront catalog.

use dotenvy::dotenv;

use storefront::db::{establish_connection_pool, run_migrations};
use storefront::repository::DieselRepository;
use storefront::services::seed::seed_catalog;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").unwrap_or("app.db".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    match seed_catalog(&repo) {
        Ok(Some(summary)) => log::info!(
            "Seeded {} categories, {} banners and {} products into {database_url}",
            summary.categories,
            summary.banners,
            summary.products
        ),
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to seed catalog: {e}");
            std::process::exit(1);
        }
    }
}
