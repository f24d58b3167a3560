use std::collections::HashSet;

use crate::models::card::Card;
use crate::models::deck::Deck;
use crate::models::validation::{ValidationMode, ValidationOptions, ValidationResult};
use crate::utils::errors::ValidationError;

/// Checks whether the candidate cards are present in a decoded deck under
/// the counting mode selected in `options`.
///
/// Candidates are partitioned into found and missing by `card_def_id`
/// membership, preserving their relative order; the two partitions
/// together reconstruct the candidate list.
///
/// # Arguments
/// * `deck` - The deck to check against.
/// * `candidates` - Cards whose presence is being checked.
/// * `options` - Counting mode plus its companion count where required.
///
/// # Returns
/// * `Ok(ValidationResult)` - Verdict and both partitions.
/// * `Err(ValidationError::MissingParameter)` - The mode's companion count
///   was not supplied.
pub fn check(
    deck: &Deck,
    candidates: &[Card],
    options: &ValidationOptions,
) -> Result<ValidationResult, ValidationError> {
    let deck_card_ids: HashSet<&str> = deck
        .cards
        .iter()
        .map(|card| card.card_def_id.as_str())
        .collect();

    let mut found_cards = Vec::new();
    let mut missing_cards = Vec::new();
    for card in candidates {
        if deck_card_ids.contains(card.card_def_id.as_str()) {
            found_cards.push(card.clone());
        } else {
            missing_cards.push(card.clone());
        }
    }
    let found_count = found_cards.len();

    let (expected_count, is_valid) = match options.mode {
        ValidationMode::All => (candidates.len(), found_count == candidates.len()),
        ValidationMode::None => (0, found_count == 0),
        ValidationMode::Exact => {
            let exact_count = options
                .exact_count
                .ok_or(ValidationError::MissingParameter("exactCount"))?;
            (exact_count, found_count == exact_count)
        }
        ValidationMode::Min => {
            let min_count = options
                .min_count
                .ok_or(ValidationError::MissingParameter("minCount"))?;
            (min_count, found_count >= min_count)
        }
        ValidationMode::Max => {
            let max_count = options
                .max_count
                .ok_or(ValidationError::MissingParameter("maxCount"))?;
            (max_count, found_count <= max_count)
        }
    };

    Ok(ValidationResult {
        is_valid,
        found_count,
        expected_count,
        found_cards,
        missing_cards,
    })
}

/// True when every candidate is in the deck.
pub fn all_in_deck(deck: &Deck, candidates: &[Card]) -> Result<bool, ValidationError> {
    Ok(check(deck, candidates, &ValidationOptions::all())?.is_valid)
}

/// True when no candidate is in the deck.
pub fn none_in_deck(deck: &Deck, candidates: &[Card]) -> Result<bool, ValidationError> {
    Ok(check(deck, candidates, &ValidationOptions::none())?.is_valid)
}

/// True when exactly `count` candidates are in the deck.
pub fn exact_in_deck(
    deck: &Deck,
    candidates: &[Card],
    count: usize,
) -> Result<bool, ValidationError> {
    Ok(check(deck, candidates, &ValidationOptions::exact(count))?.is_valid)
}

/// True when at least `count` candidates are in the deck.
pub fn min_in_deck(
    deck: &Deck,
    candidates: &[Card],
    count: usize,
) -> Result<bool, ValidationError> {
    Ok(check(deck, candidates, &ValidationOptions::min(count))?.is_valid)
}

/// True when at most `count` candidates are in the deck.
pub fn max_in_deck(
    deck: &Deck,
    candidates: &[Card],
    count: usize,
) -> Result<bool, ValidationError> {
    Ok(check(deck, candidates, &ValidationOptions::max(count))?.is_valid)
}
