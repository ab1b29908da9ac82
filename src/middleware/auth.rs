use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use axum_extra::TypedHeader;
use headers::Authorization;
use headers::authorization::Bearer;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::DesignerError;
use crate::router::DesignerState;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Identity of an authorized admin caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub subject: String,
}

/// Decides whether a request comes from an admin.
pub trait AuthGate: Send + Sync {
    fn authorize(
        &self,
        bearer: Option<&str>,
        headers: &HeaderMap,
    ) -> Result<AdminPrincipal, DesignerError>;
}

/// Accepts a single shared admin key, either as
/// - Header: `Authorization: Bearer <key>`
/// - Header: `x-admin-key: <key>`
pub struct StaticKeyGate {
    key: Arc<str>,
}

impl StaticKeyGate {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    fn matches(&self, candidate: &str) -> bool {
        !self.key.is_empty() && bool::from(candidate.as_bytes().ct_eq(self.key.as_bytes()))
    }
}

impl AuthGate for StaticKeyGate {
    fn authorize(
        &self,
        bearer: Option<&str>,
        headers: &HeaderMap,
    ) -> Result<AdminPrincipal, DesignerError> {
        if let Some(token) = bearer
            && self.matches(token)
        {
            return Ok(AdminPrincipal {
                subject: "admin-key:bearer".to_string(),
            });
        }

        if let Some(hv) = headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok())
            && self.matches(hv.trim())
        {
            return Ok(AdminPrincipal {
                subject: "admin-key:header".to_string(),
            });
        }

        Err(DesignerError::Unauthorized)
    }
}

#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminPrincipal);

impl FromRequestParts<DesignerState> for RequireAdmin {
    type Rejection = DesignerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &DesignerState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok();
        let token = bearer.as_ref().map(|TypedHeader(auth)| auth.token());

        let principal = state
            .gate
            .authorize(token, &parts.headers)
            .inspect_err(|_| debug!(path = %parts.uri.path(), "admin authorization rejected"))?;
        Ok(Self(principal))
    }
}
