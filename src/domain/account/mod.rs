//! Account domain - marketplace-side user state.

mod aggregate;
mod errors;

pub use aggregate::Account;
pub use errors::AccountError;
