pub mod memory;
pub mod remote;

pub use memory::MemoryCatalog;
pub use remote::RemoteCatalog;

use crate::models::card::Card;
use crate::utils::errors::CatalogError;

/// Lookup capability over the card catalog.
///
/// Lookups may suspend the caller: a store can live behind a network or an
/// on-disk database. A lookup that finds no record answers `Ok(None)` (or
/// omits the record from a batch); a lookup that *fails* answers
/// `Err(CatalogError)` and must never be collapsed into "no match".
///
/// Batch methods may return fewer records than requested, in store order.
/// Callers match results by the identifying field, never by position.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn by_identifier(&self, card_def_id: &str) -> Result<Option<Card>, CatalogError>;

    async fn by_short_name(&self, short_name: &str) -> Result<Option<Card>, CatalogError>;

    async fn by_identifiers(&self, card_def_ids: &[String]) -> Result<Vec<Card>, CatalogError>;

    async fn by_short_names(&self, short_names: &[String]) -> Result<Vec<Card>, CatalogError>;

    /// Tries the canonical identifier first, then the short name.
    async fn by_any_identifier(&self, identifier: &str) -> Result<Option<Card>, CatalogError> {
        if let Some(card) = self.by_identifier(identifier).await? {
            return Ok(Some(card));
        }

        self.by_short_name(identifier).await
    }
}
