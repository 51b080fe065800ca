//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement. ADMIN passes every check. Use these in
//! handlers to enforce authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use workhive_core::error::CoreError;
use workhive_core::roles::{ROLE_ADMIN, ROLE_CLIENT, ROLE_FREELANCER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `ADMIN` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires `CLIENT` or `ADMIN` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn clients_only(RequireClient(user): RequireClient) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireClient(pub AuthUser);

impl FromRequestParts<AppState> for RequireClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CLIENT && user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Client role required".into(),
            )));
        }
        Ok(RequireClient(user))
    }
}

/// Requires `FREELANCER` or `ADMIN` role. Rejects with 403 Forbidden otherwise.
pub struct RequireFreelancer(pub AuthUser);

impl FromRequestParts<AppState> for RequireFreelancer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_FREELANCER && user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Freelancer role required".into(),
            )));
        }
        Ok(RequireFreelancer(user))
    }
}
