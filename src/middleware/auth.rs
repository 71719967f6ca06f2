//! Autenticación JWT
//!
//! Los handlers piden el usuario como extractor: `AuthenticatedUser` exige un
//! token bearer válido, `AdminUser` además exige el rol admin y `MaybeUser`
//! nunca falla (rutas públicas que se enriquecen si hay sesión).

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    models::auth::{AuthenticatedUser, JwtClaims},
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Usuario con rol admin
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

/// Usuario opcional
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

/// Validar el header Authorization y construir el usuario autenticado
pub fn authenticate(parts: &Parts, jwt: &JwtConfig) -> Result<AuthenticatedUser, AppError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(header_value)?;
    let claims = verify_token(token, jwt)?;
    user_from_claims(claims)
}

fn user_from_claims(claims: JwtClaims) -> Result<AuthenticatedUser, AppError> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    Ok(AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(parts, &state.jwt).map_err(|e| {
            debug!("🔒 Request sin autenticación válida a {}: {}", parts.uri.path(), e);
            e
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        if !user.role.can_manage_catalog() {
            warn!("⛔ {} intentó acceder a {}", user.username, parts.uri.path());
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador".to_string(),
            ));
        }
        Ok(AdminUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(authenticate(parts, &state.jwt).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;
    use crate::utils::jwt::generate_token;
    use axum::http::Request;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration: 3600,
        }
    }

    fn parts_with(auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/favoritos");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let parts = parts_with(None);
        assert!(matches!(authenticate(&parts, &jwt()), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_valid_token_builds_user() {
        let id = Uuid::new_v4();
        let token = generate_token(id, "sofia", Role::User, &jwt()).unwrap();
        let parts = parts_with(Some(&format!("Bearer {}", token)));

        let user = authenticate(&parts, &jwt()).unwrap();
        assert_eq!(user.user_id, id);
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let parts = parts_with(Some("Bearer no-es-un-jwt"));
        assert!(matches!(authenticate(&parts, &jwt()), Err(AppError::Jwt(_))));
    }
}
