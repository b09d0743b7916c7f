//! Purchase command and query handlers.

mod acquire_card;
mod list_acquisitions;

pub use acquire_card::{AcquireCardCommand, AcquireCardHandler, AcquireCardResult};
pub use list_acquisitions::{
    AcquisitionEntry, ListAcquisitionsHandler, ListAcquisitionsQuery, ListAcquisitionsResult,
};
