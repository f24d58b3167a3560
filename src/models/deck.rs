use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deckcode::Deckcode;
use crate::codec::generate::generate_short;

/// A deck is complete once it holds exactly this many resolved cards.
pub const DECK_SIZE: usize = 12;

/// An ordered card list, optionally carrying the deckcode it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub deckcode: Option<Deckcode>,
}

impl Deck {
    pub fn new(cards: Vec<Card>, deckcode: Option<Deckcode>) -> Self {
        Self { cards, deckcode }
    }

    /// Short token for a complete deck.
    ///
    /// Returns `None` instead of an error when the deck is not in a
    /// codable state: not exactly twelve cards, or a card without an
    /// identifier.
    pub fn short_code(&self) -> Option<String> {
        if self.cards.len() != DECK_SIZE {
            return None;
        }

        if self.cards.iter().any(|card| card.card_def_id.is_empty()) {
            return None;
        }

        generate_short(&self.cards).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sample;

    #[test]
    fn short_code_for_a_complete_deck() {
        let deck = Deck::new(sample::discard_deck_cards(), None);
        assert_eq!(deck.short_code().as_deref(), Some(sample::SHORT_CODE_B64));
    }

    #[test]
    fn short_code_is_none_for_wrong_card_count() {
        let mut cards = sample::discard_deck_cards();
        cards.pop();
        let deck = Deck::new(cards, None);
        assert_eq!(deck.short_code(), None);

        let deck = Deck::new(Vec::new(), None);
        assert_eq!(deck.short_code(), None);
    }

    #[test]
    fn short_code_is_none_when_a_card_has_no_identifier() {
        let mut cards = sample::discard_deck_cards();
        cards[3].card_def_id = String::new();
        let deck = Deck::new(cards, None);
        assert_eq!(deck.short_code(), None);
    }
}
