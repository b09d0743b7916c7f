//! HTTP handlers for card endpoints.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::bad_request;
use crate::adapters::http::middleware::RequireIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{
    BrowseCardsQuery, BrowseScope, CreateCardCommand, DeleteCardCommand, GetCardQuery,
    UpdateCardCommand,
};
use crate::domain::card::{CardEdit, CardStatus, CardType, LicenseType, NewCard};
use crate::domain::foundation::{CardId, CommandMetadata, Identity};
use crate::ports::CatalogFilter;

use super::dto::{BrowseCardsParams, CardDetailResponse, CardPayloadRequest, CardResponse};

fn metadata(identity: Identity) -> CommandMetadata {
    CommandMetadata::new(identity).with_source("api")
}

fn parse_card_id(raw: &str) -> Result<CardId, Response> {
    CardId::from_str(raw).map_err(|_| bad_request("Invalid card ID"))
}

struct CardFields {
    card_type: CardType,
    license: LicenseType,
    status: CardStatus,
}

fn parse_card_fields(req: &CardPayloadRequest) -> Result<CardFields, Response> {
    let card_type = CardType::from_str(&req.card_type).map_err(bad_request)?;
    let license = LicenseType::from_str(&req.license_type).map_err(bad_request)?;
    let status = CardStatus::from_str(&req.status).map_err(bad_request)?;
    Ok(CardFields {
        card_type,
        license,
        status,
    })
}

/// POST /api/cards - Create a card
pub async fn create_card(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<CardPayloadRequest>,
) -> Response {
    let fields = match parse_card_fields(&req) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let cmd = CreateCardCommand {
        card: NewCard {
            title: req.title,
            summary: req.summary,
            content: req.markdown_content,
            category: req.category,
            card_type: fields.card_type,
            license: fields.license,
            status: fields.status,
        },
    };

    match state
        .create_card_handler()
        .handle(cmd, metadata(identity))
        .await
    {
        Ok(result) => (StatusCode::CREATED, Json(CardResponse::from(&result.card))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /api/cards/:id - Replace a card's fields
pub async fn update_card(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
    Json(req): Json<CardPayloadRequest>,
) -> Response {
    let card_id = match parse_card_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let fields = match parse_card_fields(&req) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let cmd = UpdateCardCommand {
        card_id,
        edit: CardEdit {
            title: req.title,
            summary: req.summary,
            content: req.markdown_content,
            category: req.category,
            card_type: fields.card_type,
            license: fields.license,
            status: fields.status,
        },
    };

    match state
        .update_card_handler()
        .handle(cmd, metadata(identity))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(CardResponse::from(&result.card))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/cards/:id - Delete a card and its update log
pub async fn delete_card(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
) -> Response {
    let card_id = match parse_card_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_card_handler()
        .handle(DeleteCardCommand { card_id }, metadata(identity))
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/cards/:id - Card detail view
pub async fn get_card(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
) -> Response {
    let card_id = match parse_card_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_card_handler()
        .handle(GetCardQuery { card_id }, metadata(identity))
        .await
    {
        Ok(detail) => (StatusCode::OK, Json(CardDetailResponse::from(detail))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/cards - Catalog listing, or the caller's own cards with ?mine=true
pub async fn browse_cards(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Query(params): Query<BrowseCardsParams>,
) -> Response {
    let scope = if params.mine {
        BrowseScope::Mine
    } else {
        let card_type = match params.card_type.as_deref() {
            Some(raw) => match CardType::from_str(raw) {
                Ok(card_type) => Some(card_type),
                Err(e) => return bad_request(e),
            },
            None => None,
        };
        BrowseScope::Catalog(CatalogFilter {
            category: params.category,
            card_type,
        })
    };

    match state
        .browse_cards_handler()
        .handle(BrowseCardsQuery { scope }, metadata(identity))
        .await
    {
        Ok(result) => {
            let cards: Vec<CardResponse> = result.cards.iter().map(CardResponse::from).collect();
            (StatusCode::OK, Json(cards)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
