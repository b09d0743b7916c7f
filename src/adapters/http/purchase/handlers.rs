//! HTTP handlers for purchase endpoints.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::bad_request;
use crate::adapters::http::middleware::RequireIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{AcquireCardCommand, ListAcquisitionsQuery};
use crate::domain::foundation::{CardId, CommandMetadata};

use super::dto::{AcquireCardResponse, LibraryEntryResponse, PurchaseResponse};

/// POST /api/purchases/:card_id - Acquire a card (free, idempotent)
pub async fn acquire_card(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Path(card_id): Path<String>,
) -> Response {
    let card_id = match CardId::from_str(&card_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid card ID"),
    };

    match state
        .acquire_card_handler()
        .handle(
            AcquireCardCommand { card_id },
            CommandMetadata::new(identity).with_source("api"),
        )
        .await
    {
        Ok(result) => {
            let status = if result.already_owned {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            let response = AcquireCardResponse {
                purchase: PurchaseResponse::from(&result.purchase),
                already_owned: result.already_owned,
            };
            (status, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /api/purchases - The caller's library
pub async fn list_acquisitions(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
) -> Response {
    match state
        .list_acquisitions_handler()
        .handle(
            ListAcquisitionsQuery,
            CommandMetadata::new(identity).with_source("api"),
        )
        .await
    {
        Ok(result) => {
            let entries: Vec<LibraryEntryResponse> =
                result.entries.iter().map(LibraryEntryResponse::from).collect();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
