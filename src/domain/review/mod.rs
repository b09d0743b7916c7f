//! Review domain - buyer ratings of acquired cards.

mod errors;
mod rating;
#[allow(clippy::module_inception)]
mod review;

pub use errors::ReviewError;
pub use rating::Rating;
pub use review::Review;
