//! Crear (o promover) la cuenta de administrador
//!
//! Lee `ADMIN_USERNAME`, `ADMIN_PASSWORD` y `ADMIN_EMAIL`. Si el usuario ya
//! existe se le asigna el rol admin y la contraseña indicada.

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use tracing::info;

use concesionaria::config::database::DatabaseConfig;
use concesionaria::database::DatabaseConnection;
use concesionaria::models::auth::Role;
use concesionaria::repositories::user_repository::UserRepository;
use concesionaria::services::auth_service::{normalize, BcryptHasher, PasswordHasher};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let username = normalize(&std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()));
    let email = normalize(
        &std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@concesionaria.local".to_string()),
    );
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
    if password.len() < 6 {
        bail!("ADMIN_PASSWORD debe tener al menos 6 caracteres");
    }

    let db_config = DatabaseConfig::from_env()?;
    let connection = DatabaseConnection::connect(&db_config).await?;
    connection.run_migrations().await?;
    let users = UserRepository::new(connection.into_pool());

    let password_hash = BcryptHasher::default().hash(&password)?;

    match users.find_by_username(&username).await? {
        Some(existing) => {
            users
                .update_role_and_password(existing.id, Role::Admin, &password_hash)
                .await?;
            info!("🔑 Usuario '{}' promovido a admin", username);
        }
        None => {
            users
                .create(&username, &email, &password_hash, Role::Admin)
                .await?;
            info!("🔑 Admin '{}' creado", username);
        }
    }

    Ok(())
}
