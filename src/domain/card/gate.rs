//! Publication gate - validation and version policy for card writes.
//!
//! The single decision point on the card write path. Every create/update
//! request passes through `evaluate` before anything is persisted; the
//! surrounding repository write must apply the outcome atomically or not at
//! all, so a rejected publish leaves the stored card untouched.
//!
//! The gate itself is a pure, synchronous computation: no I/O, no clock, no
//! internal state. Per-card serialization of the read-validate-write sequence
//! is a requirement on the persistence layer, not on the gate.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::structure::validate_structure;
use super::{CardStatus, CardVersion};

/// The requested new state of a card write.
#[derive(Debug, Clone, Copy)]
pub struct WriteRequest<'a> {
    /// Requested markdown body.
    pub content: &'a str,
    /// Requested lifecycle status.
    pub status: CardStatus,
}

/// The previously persisted state the write is applied against.
#[derive(Debug, Clone, Copy)]
pub struct PriorState<'a> {
    /// Stored markdown body.
    pub content: &'a str,
    /// Stored version.
    pub version: CardVersion,
}

/// Accepted transition: the fields the write must commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOutcome {
    /// Version to store. Equals the prior version unless the increment rule
    /// fired, in which case it is exactly prior + 1.
    pub version: CardVersion,
    /// Whether the requested content differs from the stored content
    /// (exact equality, no normalization).
    pub content_changed: bool,
    /// Whether exactly one update-log entry must be appended in the same
    /// write, stamped with the new version.
    pub log_entry_required: bool,
}

/// Rejection raised by the gate. Recoverable: the seller edits the content
/// and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicationError {
    /// Publication requested but mandatory sections are missing.
    #[error("Cannot publish: Card is missing required sections")]
    MissingSections {
        /// Missing section names in canonical order.
        missing_sections: Vec<&'static str>,
    },
}

impl From<PublicationError> for DomainError {
    fn from(err: PublicationError) -> Self {
        match &err {
            PublicationError::MissingSections { missing_sections } => DomainError::new(
                ErrorCode::MissingRequiredSections,
                err.to_string(),
            )
            .with_detail("missing_sections", missing_sections.join(", ")),
        }
    }
}

/// Evaluates a write request against the previously persisted state.
///
/// Transition rule:
/// 1. A write requesting `Published` runs the structural validator against
///    the requested content; failure rejects the entire write.
/// 2. The version increments by exactly 1 iff the content changed AND the
///    requested status is `Published`; only then is an update-log entry due.
/// 3. Draft edits and unchanged republishing keep the version and append
///    nothing, whatever the size of the change.
pub fn evaluate(
    request: WriteRequest<'_>,
    prior: PriorState<'_>,
) -> Result<GateOutcome, PublicationError> {
    if request.status == CardStatus::Published {
        let check = validate_structure(request.content);
        if !check.valid {
            return Err(PublicationError::MissingSections {
                missing_sections: check.missing_sections,
            });
        }
    }

    let content_changed = request.content != prior.content;
    let should_increment = content_changed && request.status == CardStatus::Published;

    Ok(GateOutcome {
        version: if should_increment {
            prior.version.increment()
        } else {
            prior.version
        },
        content_changed,
        log_entry_required: should_increment,
    })
}
