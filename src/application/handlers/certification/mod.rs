//! Certification command handlers.

mod submit_certification;

pub use submit_certification::{
    SubmitCertificationCommand, SubmitCertificationHandler, SubmitCertificationResult,
};
