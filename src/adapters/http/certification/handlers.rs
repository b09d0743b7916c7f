//! HTTP handlers for certification endpoints.

use std::str::FromStr;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::bad_request;
use crate::adapters::http::middleware::RequireIdentity;
use crate::adapters::http::state::AppState;
use crate::application::SubmitCertificationCommand;
use crate::domain::foundation::{CardId, CommandMetadata};

use super::dto::{CertificationResponse, SubmitCertificationRequest};

/// POST /api/certifications - Submit a certification claim
pub async fn submit_certification(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<SubmitCertificationRequest>,
) -> Response {
    let card_id = match CardId::from_str(&req.card_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid card ID"),
    };

    let cmd = SubmitCertificationCommand {
        card_id,
        problem_solved: req.problem_solved,
        how_used: req.how_used,
        outcome: req.outcome,
        proof_links: req.proof_links,
    };

    match state
        .submit_certification_handler()
        .handle(cmd, CommandMetadata::new(identity).with_source("api"))
        .await
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(CertificationResponse::from(&result.certification)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
