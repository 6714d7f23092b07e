//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use storefront::db::{DbPool, establish_connection_pool, run_migrations};

/// Migrated SQLite database living in its own temporary directory.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    // Dropped last so the pool closes before the files are removed.
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("temp path is not UTF-8");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

/// Administrator whose password is [`ADMIN_PASSWORD`].
pub fn admin_credentials() -> storefront::config::AdminCredentials {
    storefront::config::AdminCredentials {
        username: ADMIN_USERNAME.to_string(),
        password_hash: storefront::services::auth::hash_password(ADMIN_PASSWORD)
            .expect("hashing should succeed"),
    }
}
