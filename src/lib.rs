pub mod catalog;
pub mod codec;
pub mod models;
pub mod utils;
pub mod validator;

pub use catalog::{Catalog, MemoryCatalog, RemoteCatalog};
pub use codec::{decode, extract, generate_display, generate_long, generate_short, resolve};
pub use models::card::Card;
pub use models::deck::{Deck, DECK_SIZE};
pub use models::deckcode::Deckcode;
pub use models::settings::Settings;
pub use models::validation::{ValidationMode, ValidationOptions, ValidationResult};
pub use utils::errors::{CatalogError, GenerateError, ValidationError};
pub use validator::{all_in_deck, check, exact_in_deck, max_in_deck, min_in_deck, none_in_deck};
