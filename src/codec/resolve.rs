use crate::catalog::Catalog;
use crate::logger;
use crate::models::card::Card;
use crate::models::deck::{Deck, DECK_SIZE};
use crate::models::deckcode::{Deckcode, LongDeckPayload};
use crate::utils::errors::CatalogError;
use crate::utils::logger::Logger;

/// Resolves a classified deckcode into a complete deck.
///
/// Identifiers with no catalog record are dropped without failing the
/// decode; a deck is surfaced only when exactly `DECK_SIZE` cards resolve,
/// never partially. A failed catalog lookup is not a "no match" and
/// propagates as an error.
///
/// # Arguments
/// * `deckcode` - The classified payload produced by `extract`.
/// * `catalog` - Card lookup capability.
///
/// # Returns
/// * `Ok(Some(Deck))` - Exactly twelve cards resolved, in payload order.
/// * `Ok(None)` - The payload did not resolve to a complete deck.
/// * `Err(CatalogError)` - The card store itself failed.
pub async fn resolve<C: Catalog>(
    deckcode: Deckcode,
    catalog: &C,
) -> Result<Option<Deck>, CatalogError> {
    let cards = match &deckcode {
        Deckcode::Long(payload) => resolve_long(payload, catalog).await?,
        Deckcode::Short(payload) => resolve_short(payload, catalog).await?,
    };

    if cards.len() == DECK_SIZE {
        Ok(Some(Deck::new(cards, Some(deckcode))))
    } else {
        Ok(None)
    }
}

async fn resolve_long<C: Catalog>(
    payload: &str,
    catalog: &C,
) -> Result<Vec<Card>, CatalogError> {
    let parsed: LongDeckPayload = match serde_json::from_str(payload) {
        Ok(parsed) => parsed,
        Err(error) => {
            logger!(WARN, "[RESOLVE] Unusable long payload: {error}");
            return Ok(Vec::new());
        }
    };

    let mut cards = Vec::with_capacity(parsed.cards.len());
    for entry in &parsed.cards {
        match catalog.by_identifier(&entry.card_def_id).await? {
            Some(card) => cards.push(card),
            None => logger!(
                DEBUG,
                "[RESOLVE] Dropping unknown card id `{}`",
                entry.card_def_id
            ),
        }
    }

    Ok(cards)
}

async fn resolve_short<C: Catalog>(
    payload: &str,
    catalog: &C,
) -> Result<Vec<Card>, CatalogError> {
    let short_names: Vec<String> = payload.split(',').map(str::to_string).collect();
    let found = catalog.by_short_names(&short_names).await?;

    // Batch results arrive in store order; re-align them to the requested
    // sequence and drop names the store had no record for.
    let mut cards = Vec::with_capacity(short_names.len());
    for short_name in &short_names {
        match found.iter().find(|card| &card.short_name == short_name) {
            Some(card) => cards.push(card.clone()),
            None => logger!(
                DEBUG,
                "[RESOLVE] Dropping unknown short name `{short_name}`"
            ),
        }
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sample;

    /// Catalog stub whose lookups always fail, as a store behind a dead
    /// connection would.
    struct UnreachableCatalog;

    impl Catalog for UnreachableCatalog {
        async fn by_identifier(&self, _: &str) -> Result<Option<Card>, CatalogError> {
            Err(CatalogError::StoreUnavailable("connection refused".to_string()))
        }

        async fn by_short_name(&self, _: &str) -> Result<Option<Card>, CatalogError> {
            Err(CatalogError::StoreUnavailable("connection refused".to_string()))
        }

        async fn by_identifiers(&self, _: &[String]) -> Result<Vec<Card>, CatalogError> {
            Err(CatalogError::StoreUnavailable("connection refused".to_string()))
        }

        async fn by_short_names(&self, _: &[String]) -> Result<Vec<Card>, CatalogError> {
            Err(CatalogError::StoreUnavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn resolves_a_short_code_in_requested_order() {
        let catalog = sample::catalog();
        let deckcode = Deckcode::Short(sample::SHORT_CODE_TEXT.to_string());

        let deck = resolve(deckcode.clone(), &catalog).await.unwrap().unwrap();

        let ids: Vec<&str> = deck
            .cards
            .iter()
            .map(|card| card.card_def_id.as_str())
            .collect();
        let expected_cards = sample::discard_deck_cards();
        let expected: Vec<&str> = expected_cards
            .iter()
            .map(|card| card.card_def_id.as_str())
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(deck.deckcode, Some(deckcode));
    }

    #[tokio::test]
    async fn resolves_a_short_code_against_store_order() {
        // Reverse the requested order; the store keeps its own order, so
        // this only passes if resolution re-aligns to the request.
        let catalog = sample::catalog();
        let reversed: Vec<&str> = sample::SHORT_CODE_TEXT.split(',').rev().collect();
        let deckcode = Deckcode::Short(reversed.join(","));

        let deck = resolve(deckcode, &catalog).await.unwrap().unwrap();

        let names: Vec<&str> = deck
            .cards
            .iter()
            .map(|card| card.short_name.as_str())
            .collect();
        assert_eq!(names, reversed);
    }

    #[tokio::test]
    async fn resolves_a_long_code_in_payload_order() {
        let catalog = sample::catalog();
        let deckcode = Deckcode::Long(sample::LONG_CODE_TEXT.to_string());

        let deck = resolve(deckcode, &catalog).await.unwrap().unwrap();

        let ids: Vec<&str> = deck
            .cards
            .iter()
            .map(|card| card.card_def_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "Apocalypse",
                "Blade",
                "ColleenWing",
                "CorvusGlaive",
                "Dracula",
                "Gambit",
                "Khonshu",
                "LadySif",
                "Modok",
                "Morbius",
                "ProximaMidnight",
                "Scorn"
            ]
        );
    }

    #[tokio::test]
    async fn drops_unknown_ids_and_never_surfaces_a_partial_deck() {
        let catalog = sample::catalog();
        let payload = sample::LONG_CODE_TEXT.replace("Gambit", "NotACard");
        let deck = resolve(Deckcode::Long(payload), &catalog).await.unwrap();
        assert!(deck.is_none());
    }

    #[tokio::test]
    async fn drops_unknown_short_names_and_never_surfaces_a_partial_deck() {
        let catalog = sample::catalog();
        let payload = sample::SHORT_CODE_TEXT.replace("Gmbt6", "Xyz9");
        let deck = resolve(Deckcode::Short(payload), &catalog).await.unwrap();
        assert!(deck.is_none());
    }

    #[tokio::test]
    async fn thirteen_resolvable_ids_are_not_a_deck() {
        let catalog = sample::catalog();
        let payload = sample::LONG_CODE_TEXT.replace(
            r#"{"CardDefId":"Scorn"}"#,
            r#"{"CardDefId":"Scorn"},{"CardDefId":"IronMan"}"#,
        );
        let deck = resolve(Deckcode::Long(payload), &catalog).await.unwrap();
        assert!(deck.is_none());
    }

    #[tokio::test]
    async fn unusable_long_payload_resolves_to_none() {
        let catalog = sample::catalog();
        let deck = resolve(Deckcode::Long("{ not json".to_string()), &catalog)
            .await
            .unwrap();
        assert!(deck.is_none());
    }

    #[tokio::test]
    async fn empty_short_payload_resolves_to_none() {
        let catalog = sample::catalog();
        let deck = resolve(Deckcode::Short(String::new()), &catalog)
            .await
            .unwrap();
        assert!(deck.is_none());
    }

    #[tokio::test]
    async fn store_failure_propagates_instead_of_reading_as_no_match() {
        let deckcode = Deckcode::Short(sample::SHORT_CODE_TEXT.to_string());
        let result = resolve(deckcode, &UnreachableCatalog).await;
        assert!(matches!(result, Err(CatalogError::StoreUnavailable(_))));

        let deckcode = Deckcode::Long(sample::LONG_CODE_TEXT.to_string());
        let result = resolve(deckcode, &UnreachableCatalog).await;
        assert!(matches!(result, Err(CatalogError::StoreUnavailable(_))));
    }
}
