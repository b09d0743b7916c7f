//! Certification domain - verified usage claims.

#[allow(clippy::module_inception)]
mod certification;
mod errors;

pub use certification::Certification;
pub use errors::CertificationError;
