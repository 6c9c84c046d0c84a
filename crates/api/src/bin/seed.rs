//! One-shot bootstrap binary: ensure a superadmin account exists.
//!
//! Reads `SEED_ADMIN_EMAIL` and `SEED_ADMIN_PASSWORD` from the environment
//! and creates the account if no user with that email exists. Idempotent,
//! so it is safe to run on every deploy.
//!
//! ```text
//! SEED_ADMIN_EMAIL=admin@example.com SEED_ADMIN_PASSWORD=... cargo run --bin lingo-seed
//! ```

use lingo_core::enums::Role;
use lingo_db::repositories::UserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lingo_api::auth::password::hash_password;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingo_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let email = std::env::var("SEED_ADMIN_EMAIL").expect("SEED_ADMIN_EMAIL must be set");
    let password = std::env::var("SEED_ADMIN_PASSWORD").expect("SEED_ADMIN_PASSWORD must be set");
    assert!(
        password.len() >= 8,
        "SEED_ADMIN_PASSWORD must be at least 8 characters"
    );

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = lingo_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    lingo_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Some(existing) = UserRepo::find_by_email(&pool, &email)
        .await
        .expect("Failed to query users")
    {
        tracing::info!(user_id = existing.id, %email, "superadmin already exists, nothing to do");
        return;
    }

    let password_hash = hash_password(&password).expect("Failed to hash password");
    let user = UserRepo::create(
        &pool,
        &email,
        &password_hash,
        "Superadmin",
        Some(Role::Superadmin),
    )
    .await
    .expect("Failed to create superadmin");

    tracing::info!(user_id = user.id, %email, "superadmin created");
}
