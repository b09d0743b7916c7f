//! Card domain - the publication gate and its aggregate.

mod aggregate;
pub mod gate;
pub mod structure;
pub mod toc;
mod update_log;
mod value_objects;

pub use aggregate::{Card, CardEdit, CardError, EditOutcome, NewCard};
pub use gate::{GateOutcome, PriorState, PublicationError, WriteRequest};
pub use structure::{validate_structure, StructureCheck, MANDATORY_SECTIONS};
pub use toc::table_of_contents;
pub use update_log::CardUpdate;
pub use value_objects::{CardContent, CardStatus, CardType, CardVersion, LicenseType};
