//! Print the Argon2id hash of a password for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash-password <password>` or pipe the password on stdin.

use std::io::{self, BufRead};

use storefront::services::auth::hash_password;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                log::error!("Failed to read password from stdin: {e}");
                std::process::exit(1);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        log::error!("Password must not be empty");
        std::process::exit(1);
    }

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            log::error!("Failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
