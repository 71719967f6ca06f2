//! Servicio de autenticación
//!
//! Registro, login y perfil. El hash de contraseñas queda detrás del trait
//! `PasswordHasher` para poder probar el flujo sin el costo de bcrypt.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::auth::{AuthenticatedUser, Role};
use crate::models::user::{User, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, unique_violation, AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Implementación con bcrypt
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
    }
}

pub struct AuthService {
    users: UserRepository,
    hasher: Arc<dyn PasswordHasher>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self::with_hasher(pool, jwt, Arc::new(BcryptHasher::default()))
    }

    pub fn with_hasher(pool: PgPool, jwt: JwtConfig, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users: UserRepository::new(pool),
            hasher,
            jwt,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let username = normalize(&request.username);
        let email = normalize(&request.email);

        if self.users.username_exists(&username).await? {
            return Err(conflict_error("Usuario", "username", &username));
        }
        if self.users.email_exists(&email).await? {
            return Err(conflict_error("Usuario", "email", &email));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        // Otro registro concurrente puede ganar entre el chequeo y el INSERT
        let user = self
            .users
            .create(&username, &email, &password_hash, Role::User)
            .await
            .map_err(|e| duplicate_user_error(e, &username, &email))?;

        info!("👤 Usuario registrado: {}", user.username);
        Ok(user.into())
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;
        let username = normalize(&request.username);
        let user = self.users.find_by_username(&username).await?;
        let user = verify_credentials(self.hasher.as_ref(), user, &request.password)?;

        let token = generate_token(user.id, &user.username, user.role, &self.jwt)?;
        info!("🔐 Login exitoso: {} ({})", user.username, user.role.as_str());

        Ok(LoginResponse::bearer(token, self.jwt.expiration, user.into()))
    }

    pub async fn me(&self, user: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user.into())
    }
}

/// Usuario inexistente y contraseña incorrecta responden igual
pub fn verify_credentials(
    hasher: &dyn PasswordHasher,
    user: Option<User>,
    password: &str,
) -> AppResult<User> {
    let Some(user) = user else {
        warn!("🚫 Login con usuario inexistente");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !hasher.verify(password, &user.password_hash)? {
        warn!("🚫 Contraseña incorrecta para {}", user.username);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    Ok(user)
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn duplicate_user_error(err: AppError, username: &str, email: &str) -> AppError {
    match unique_violation(&err) {
        Some(constraint) if constraint.contains("email") => conflict_error("Usuario", "email", email),
        Some(_) => conflict_error("Usuario", "username", username),
        None => err,
    }
}
