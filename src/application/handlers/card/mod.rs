//! Card command and query handlers.

mod browse_cards;
mod create_card;
mod delete_card;
mod get_card;
mod update_card;

pub use browse_cards::{BrowseCardsHandler, BrowseCardsQuery, BrowseCardsResult, BrowseScope};
pub use create_card::{CreateCardCommand, CreateCardHandler, CreateCardResult};
pub use delete_card::{DeleteCardCommand, DeleteCardHandler, DeleteCardResult};
pub use get_card::{CardDetail, GetCardHandler, GetCardQuery};
pub use update_card::{UpdateCardCommand, UpdateCardHandler, UpdateCardResult};
