//! HTTP handlers for admin moderation endpoints.

use std::str::FromStr;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::certification::CertificationResponse;
use crate::adapters::http::error::bad_request;
use crate::adapters::http::middleware::RequireIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{
    ListPendingSellersQuery, ListUnverifiedCertificationsQuery, ModerateCertificationCommand,
    ModerateSellerCommand,
};
use crate::domain::foundation::{CertificationId, CommandMetadata, UserId};

use super::dto::{AccountResponse, ModerateCertificationRequest, ModerateSellerRequest};

/// POST /api/admin/certifications - Verify or reject a claim
pub async fn moderate_certification(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<ModerateCertificationRequest>,
) -> Response {
    let certification_id = match CertificationId::from_str(&req.certification_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid certification ID"),
    };

    let cmd = ModerateCertificationCommand {
        certification_id,
        decision: req.decision.into(),
    };

    match state
        .moderate_certification_handler()
        .handle(cmd, CommandMetadata::new(identity).with_source("api"))
        .await
    {
        Ok(result) => match result.certification {
            Some(certification) => (
                StatusCode::OK,
                Json(CertificationResponse::from(&certification)),
            )
                .into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        Err(e) => e.into_response(),
    }
}

/// GET /api/admin/certifications - Unverified claims, oldest first
pub async fn list_unverified_certifications(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
) -> Response {
    match state
        .list_unverified_certifications_handler()
        .handle(
            ListUnverifiedCertificationsQuery,
            CommandMetadata::new(identity).with_source("api"),
        )
        .await
    {
        Ok(certifications) => {
            let body: Vec<CertificationResponse> =
                certifications.iter().map(CertificationResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// POST /api/admin/sellers - Approve or reject a seller application
pub async fn moderate_seller(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<ModerateSellerRequest>,
) -> Response {
    let user_id = match UserId::new(&req.user_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid user ID"),
    };

    let cmd = ModerateSellerCommand {
        user_id,
        decision: req.decision.into(),
    };

    match state
        .moderate_seller_handler()
        .handle(cmd, CommandMetadata::new(identity).with_source("api"))
        .await
    {
        Ok(result) => {
            (StatusCode::OK, Json(AccountResponse::from(&result.account))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /api/admin/sellers - Seller applications awaiting review
pub async fn list_pending_sellers(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
) -> Response {
    match state
        .list_pending_sellers_handler()
        .handle(
            ListPendingSellersQuery,
            CommandMetadata::new(identity).with_source("api"),
        )
        .await
    {
        Ok(accounts) => {
            let body: Vec<AccountResponse> = accounts.iter().map(AccountResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
