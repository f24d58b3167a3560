pub mod extract;
pub mod generate;
pub mod resolve;

pub use extract::extract;
pub use generate::{generate_display, generate_long, generate_short};
pub use resolve::resolve;

use crate::catalog::Catalog;
use crate::models::deck::Deck;
use crate::utils::errors::CatalogError;

/// Extracts and resolves in one step: raw shared text in, complete deck
/// out. Text with no usable token decodes to `None`.
pub async fn decode<C: Catalog>(input: &str, catalog: &C) -> Result<Option<Deck>, CatalogError> {
    match extract::extract(input) {
        Some(deckcode) => resolve::resolve(deckcode, catalog).await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::deckcode::Deckcode;
    use crate::utils::sample;

    #[tokio::test]
    async fn decodes_raw_shared_text_into_a_deck() {
        let catalog = sample::catalog();
        let input = format!("# Discard\n#\n{}\n# shared for laddering", sample::SHORT_CODE_B64);

        let deck = decode(&input, &catalog).await.unwrap().unwrap();

        assert_eq!(deck.cards.len(), 12);
        assert_eq!(
            deck.deckcode,
            Some(Deckcode::Short(sample::SHORT_CODE_TEXT.to_string()))
        );
    }

    #[tokio::test]
    async fn text_without_a_token_decodes_to_none() {
        let catalog = sample::catalog();
        assert!(decode("# nothing here", &catalog).await.unwrap().is_none());
        assert!(decode("", &catalog).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn short_token_round_trips_in_order() {
        let catalog = sample::catalog();
        let cards = sample::discard_deck_cards();

        let token = generate::generate_short(&cards).unwrap();
        let deck = decode(&token, &catalog).await.unwrap().unwrap();

        assert_eq!(deck.cards, cards);
    }

    #[tokio::test]
    async fn long_token_round_trips_in_order() {
        let catalog = sample::catalog();
        let mut cards = sample::discard_deck_cards();
        cards.reverse();

        let token = generate::generate_long(&cards);
        let deck = decode(&token, &catalog).await.unwrap().unwrap();

        assert_eq!(deck.cards, cards);
    }

    #[tokio::test]
    async fn long_token_with_unresolvable_ids_decodes_to_none() {
        let catalog = sample::catalog();
        let cards = sample::discard_deck_cards();

        // Eleven resolvable cards only.
        let token = generate::generate_long(&cards[..11]);
        assert!(decode(&token, &catalog).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn display_block_round_trips_through_its_embedded_token() {
        let catalog = sample::catalog();
        let cards = sample::discard_deck_cards();

        let display = generate::generate_display(&cards).unwrap();
        let deck = decode(&display, &catalog).await.unwrap().unwrap();

        // The sorted listing is presentation only; the token preserves
        // the caller's order.
        assert_eq!(deck.cards, cards);
    }
}
