use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Catalog;
use crate::logger;
use crate::models::card::Card;
use crate::utils::errors::CatalogError;
use crate::utils::logger::Logger;

/// Card record as stored in a catalog dump, before normalization.
///
/// Older dumps carry `obtainable` as `"1"`/`"0"` text, newer ones as a
/// plain bool; `releaseDate` is an RFC 3339 string in both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    card_def_id: String,
    short_name: String,
    name: String,
    cost: String,
    power: String,
    description: String,
    release_date: String,
    obtainable: ObtainableFlag,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ObtainableFlag {
    Flag(bool),
    Text(String),
}

impl ObtainableFlag {
    fn as_bool(&self) -> bool {
        match self {
            ObtainableFlag::Flag(flag) => *flag,
            ObtainableFlag::Text(text) => text == "1",
        }
    }
}

impl RawCard {
    fn into_card(self) -> Result<Card, CatalogError> {
        let release_date = DateTime::parse_from_rfc3339(&self.release_date)
            .map_err(|error| {
                CatalogError::InvalidCardData(format!("`{}`: {}", self.card_def_id, error))
            })?
            .with_timezone(&Utc);

        Ok(Card {
            card_def_id: self.card_def_id,
            short_name: self.short_name,
            name: self.name,
            cost: self.cost,
            power: self.power,
            description: self.description,
            release_date,
            obtainable: self.obtainable.as_bool(),
        })
    }
}

/// Card catalog backed by a flat in-memory table.
#[derive(Debug)]
pub struct MemoryCatalog {
    cards: Vec<Card>,
}

impl MemoryCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Loads a raw catalog dump (a JSON array of card records).
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawCard> = serde_json::from_str(data)
            .map_err(|error| CatalogError::InvalidCardData(error.to_string()))?;

        let mut cards = Vec::with_capacity(raw.len());
        for record in raw {
            cards.push(record.into_card()?);
        }

        logger!(DEBUG, "[CATALOG] Loaded {} cards into memory", cards.len());
        Ok(Self { cards })
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Catalog for MemoryCatalog {
    async fn by_identifier(&self, card_def_id: &str) -> Result<Option<Card>, CatalogError> {
        let card = self.cards.iter().find(|c| c.card_def_id == card_def_id);
        Ok(card.cloned())
    }

    async fn by_short_name(&self, short_name: &str) -> Result<Option<Card>, CatalogError> {
        let card = self.cards.iter().find(|c| c.short_name == short_name);
        Ok(card.cloned())
    }

    async fn by_identifiers(&self, card_def_ids: &[String]) -> Result<Vec<Card>, CatalogError> {
        let cards = self
            .cards
            .iter()
            .filter(|c| card_def_ids.contains(&c.card_def_id))
            .cloned()
            .collect();
        Ok(cards)
    }

    async fn by_short_names(&self, short_names: &[String]) -> Result<Vec<Card>, CatalogError> {
        let cards = self
            .cards
            .iter()
            .filter(|c| short_names.contains(&c.short_name))
            .cloned()
            .collect();
        Ok(cards)
    }
}
