use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::models::card::Card;
use crate::models::deck::DECK_SIZE;
use crate::models::deckcode::{LongDeckCard, LongDeckPayload};
use crate::utils::errors::GenerateError;

const GENERATED_DECK_NAME: &str = "Generated Deck";
const TOKEN_MARKER: char = '$';
const DISPLAY_FOOTER: &str = "# Generated with deckcode";

/// Generates the short-form token for a complete deck.
///
/// # Arguments
/// * `cards` - Exactly twelve cards, in the order the token should carry.
///
/// # Returns
/// * `Ok(String)` - Base64 of the comma-joined short names.
/// * `Err(GenerateError::CountMismatch)` - Not exactly twelve cards.
pub fn generate_short(cards: &[Card]) -> Result<String, GenerateError> {
    if cards.len() != DECK_SIZE {
        return Err(GenerateError::CountMismatch {
            expected: DECK_SIZE,
            actual: cards.len(),
        });
    }

    let short_names: Vec<&str> = cards.iter().map(|card| card.short_name.as_str()).collect();
    Ok(STANDARD.encode(short_names.join(",")))
}

/// Generates the long-form token: base64 of a JSON deck document listing
/// card identifiers in input order. No count constraint.
pub fn generate_long(cards: &[Card]) -> String {
    let payload = LongDeckPayload {
        name: GENERATED_DECK_NAME.to_string(),
        cards: cards
            .iter()
            .map(|card| LongDeckCard {
                card_def_id: card.card_def_id.clone(),
            })
            .collect(),
    };

    let readable = serde_json::to_string(&payload).expect("long payload is always serializable");
    STANDARD.encode(readable)
}

/// Generates the human-readable display block: one `# (<cost>) <name>`
/// line per card sorted by cost then name, a bare `#` line, the marked
/// short token, and the attribution footer.
///
/// The sort runs on a copy. The embedded token keeps the caller's order.
pub fn generate_display(cards: &[Card]) -> Result<String, GenerateError> {
    let deckcode = generate_short(cards)?;

    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| {
        a.cost_value()
            .cmp(&b.cost_value())
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut display = String::new();
    for card in &sorted {
        display.push_str(&format!("# ({}) {}\n", card.cost, card.name));
    }
    display.push_str("#\n");
    display.push_str(&format!("{TOKEN_MARKER}{deckcode}\n"));
    display.push_str(DISPLAY_FOOTER);

    Ok(display)
}
