//! Purchase domain - acquisition records.

mod errors;
#[allow(clippy::module_inception)]
mod purchase;

pub use errors::PurchaseError;
pub use purchase::Purchase;
