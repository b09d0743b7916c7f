//! HTTP error responses.
//!
//! Each area error maps onto a status code and a JSON body with a
//! human-readable `message`. The publication gate additionally reports
//! which sections are missing so the editor can point at them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::account::AccountError;
use crate::domain::card::{CardError, PublicationError};
use crate::domain::certification::CertificationError;
use crate::domain::purchase::PurchaseError;
use crate::domain::review::ReviewError;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,

    /// Present only when the publication gate rejected a write.
    #[serde(rename = "missingSections", skip_serializing_if = "Option::is_none")]
    pub missing_sections: Option<Vec<&'static str>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            missing_sections: None,
        }
    }
}

fn error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}

/// 400 with a plain message, for malformed path/query input.
pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, ErrorBody::message(message))
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        match self {
            CardError::Validation(e) => bad_request(e.to_string()),
            CardError::Publication(e) => {
                let PublicationError::MissingSections { missing_sections } = &e;
                error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: e.to_string(),
                        missing_sections: Some(missing_sections.clone()),
                    },
                )
            }
            CardError::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            CardError::Forbidden(_) => {
                error_response(StatusCode::FORBIDDEN, ErrorBody::message(self.to_string()))
            }
            CardError::Conflict(_) => {
                error_response(StatusCode::CONFLICT, ErrorBody::message(self.to_string()))
            }
            CardError::Storage(e) => internal(e.to_string()),
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        match self {
            ReviewError::CardNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            ReviewError::NotPurchased => {
                error_response(StatusCode::FORBIDDEN, ErrorBody::message(self.to_string()))
            }
            ReviewError::AlreadyReviewed => {
                error_response(StatusCode::CONFLICT, ErrorBody::message(self.to_string()))
            }
            ReviewError::Validation(e) => bad_request(e.to_string()),
            ReviewError::Storage(e) => internal(e.to_string()),
        }
    }
}

impl IntoResponse for PurchaseError {
    fn into_response(self) -> Response {
        match self {
            PurchaseError::CardNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            PurchaseError::Storage(e) => internal(e.to_string()),
        }
    }
}

impl IntoResponse for CertificationError {
    fn into_response(self) -> Response {
        match self {
            CertificationError::CardNotFound(_) | CertificationError::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            CertificationError::NotPurchased | CertificationError::Forbidden(_) => {
                error_response(StatusCode::FORBIDDEN, ErrorBody::message(self.to_string()))
            }
            CertificationError::AlreadyCertified => {
                error_response(StatusCode::CONFLICT, ErrorBody::message(self.to_string()))
            }
            CertificationError::Validation(e) => bad_request(e.to_string()),
            CertificationError::Storage(e) => internal(e.to_string()),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match self {
            AccountError::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            AccountError::Forbidden(_) => {
                error_response(StatusCode::FORBIDDEN, ErrorBody::message(self.to_string()))
            }
            AccountError::Storage(e) => internal(e.to_string()),
        }
    }
}

fn internal(message: String) -> Response {
    // Storage details go to the log, not to the client.
    tracing::error!(error = %message, "request failed");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::message("An internal error occurred"),
    )
}
