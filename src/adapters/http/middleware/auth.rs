//! Identity extraction for axum handlers.
//!
//! The marketplace sits behind an external identity service; by the time a
//! request reaches this process, a gateway has already authenticated the
//! caller and attached the resolved identity as headers:
//!
//! ```text
//! X-User-Id: user-123
//! X-User-Role: SELLER
//! X-Seller-Approved: true
//! ```
//!
//! `RequireIdentity` turns those headers into a domain [`Identity`]. A
//! missing or malformed `X-User-Id` rejects with 401. The role header is
//! optional and defaults to `BUYER`; the approval header defaults to false.
//! Swapping the gateway for a JWT validator only replaces this extractor.

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::str::FromStr;

use crate::adapters::http::error::ErrorBody;
use crate::domain::foundation::{Identity, UserId, UserRole};

/// Extractor that requires a resolved caller identity.
#[derive(Debug, Clone)]
pub struct RequireIdentity(pub Identity);

impl RequireIdentity {
    fn from_headers(headers: &HeaderMap) -> Result<Self, IdentityRejection> {
        let user_id = headers
            .get("X-User-Id")
            .and_then(|v| v.to_str().ok())
            .ok_or(IdentityRejection::Unauthenticated)?;
        let user_id =
            UserId::new(user_id).map_err(|_| IdentityRejection::Unauthenticated)?;

        let role = match headers.get("X-User-Role") {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| IdentityRejection::InvalidHeader("X-User-Role"))?;
                UserRole::from_str(raw)
                    .map_err(|_| IdentityRejection::InvalidHeader("X-User-Role"))?
            }
            None => UserRole::Buyer,
        };

        let seller_approved = match headers.get("X-Seller-Approved") {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| IdentityRejection::InvalidHeader("X-Seller-Approved"))?;
                match raw.to_ascii_lowercase().as_str() {
                    "true" => true,
                    "false" => false,
                    _ => return Err(IdentityRejection::InvalidHeader("X-Seller-Approved")),
                }
            }
            None => false,
        };

        Ok(RequireIdentity(Identity::new(user_id, role, seller_approved)))
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequireIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Self::from_headers(&parts.headers) })
    }
}

/// Rejection for missing or malformed identity headers.
#[derive(Debug, Clone)]
pub enum IdentityRejection {
    /// No usable `X-User-Id` header.
    Unauthenticated,
    /// A present identity header failed to parse.
    InvalidHeader(&'static str),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let message = match self {
            IdentityRejection::Unauthenticated => "Authentication required".to_string(),
            IdentityRejection::InvalidHeader(name) => {
                format!("Invalid identity header: {}", name)
            }
        };
        (StatusCode::UNAUTHORIZED, Json(ErrorBody::message(message))).into_response()
    }
}
