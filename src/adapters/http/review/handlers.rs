//! HTTP handlers for review endpoints.

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
use crate::application::SubmitReviewCommand;
use crate::domain::foundation::{CardId, CommandMetadata};

use super::dto::{ReviewResponse, SubmitReviewRequest};

/// POST /api/reviews - Review an acquired card
pub async fn submit_review(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<SubmitReviewRequest>,
) -> Response {
    let card_id = match CardId::from_str(&req.card_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid card ID"),
    };

    let cmd = SubmitReviewCommand {
        card_id,
        rating: req.rating,
        title: req.title,
        content: req.content,
    };

    match state
        .submit_review_handler()
        .handle(cmd, CommandMetadata::new(identity).with_source("api"))
        .await
    {
        Ok(result) => {
            (StatusCode::CREATED, Json(ReviewResponse::from(&result.review))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
