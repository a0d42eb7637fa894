pub mod token;

use std::str::FromStr;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::IntoResponse};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};

use crate::{config::InfraPool, error::AuthError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Manager,
    StaffMember,
}

impl FromStr for StaffRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manager" => Ok(StaffRole::Manager),
            "StaffMember" => Ok(StaffRole::StaffMember),
            _ => Err(AuthError::PermissionDenied),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub sub: String,
    pub roles: Vec<StaffRole>,
}

impl AuthUser {
    pub fn has_role(&self, role: StaffRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn require_role(&self, role: StaffRole) -> Result<(), AuthError> {
        if self.has_role(role) {
            Ok(())
        } else {
            tracing::debug!("{} lacks role {:?}", self.sub, role);
            Err(AuthError::PermissionDenied)
        }
    }
}

/// Admits any authenticated member of staff.
pub async fn user_auth_middleware(
    State(pool): State<InfraPool>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, AuthError> {
    let auth_user = inner_auth(&pool, bearer)?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

pub async fn manager_auth_middleware(
    State(pool): State<InfraPool>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, AuthError> {
    let auth_user = inner_auth(&pool, bearer)?;
    auth_user.require_role(StaffRole::Manager)?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

fn inner_auth(
    pool: &InfraPool,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<AuthUser, AuthError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AuthError::InvalidToken)?;
    let claims = pool.verifier.verify(bearer.token()).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        AuthError::InvalidToken
    })?;
    let roles: Vec<StaffRole> = claims
        .groups
        .iter()
        .filter_map(|g| g.parse().ok())
        .collect();
    if roles.is_empty() {
        return Err(AuthError::PermissionDenied);
    }
    Ok(AuthUser {
        sub: claims.sub,
        roles,
    })
}
