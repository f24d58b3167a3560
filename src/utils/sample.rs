//! Fixture deck shared across tests: the twelve-card discard deck, its
//! canonical tokens, and one card that is not part of it.

use chrono::{DateTime, Utc};

use crate::catalog::MemoryCatalog;
use crate::models::card::Card;

pub const SHORT_CODE_B64: &str =
    "QXBjbHBzQSxCbGQ1LENsbG5XbmdCLENydnNHbHZDLERyY2w3LEdtYnQ2LEtobnNoNyxMZFNmNyxNZGs1LE1yYnM3LFByeG1NZG5naHRGLFNjcm41";

pub const SHORT_CODE_TEXT: &str =
    "ApclpsA,Bld5,CllnWngB,CrvsGlvC,Drcl7,Gmbt6,Khnsh7,LdSf7,Mdk5,Mrbs7,PrxmMdnghtF,Scrn5";

pub const LONG_CODE_B64: &str =
    "eyJOYW1lIjoiRGlzY2FyZCIsIkNhcmRzIjpbeyJDYXJkRGVmSWQiOiJBcG9jYWx5cHNlIn0seyJDYXJkRGVmSWQiOiJCbGFkZSJ9LHsiQ2FyZERlZklkIjoiQ29sbGVlbldpbmcifSx7IkNhcmREZWZJZCI6IkNvcnZ1c0dsYWl2ZSJ9LHsiQ2FyZERlZklkIjoiRHJhY3VsYSJ9LHsiQ2FyZERlZklkIjoiR2FtYml0In0seyJDYXJkRGVmSWQiOiJLaG9uc2h1In0seyJDYXJkRGVmSWQiOiJMYWR5U2lmIn0seyJDYXJkRGVmSWQiOiJNb2RvayJ9LHsiQ2FyZERlZklkIjoiTW9yYml1cyJ9LHsiQ2FyZERlZklkIjoiUHJveGltYU1pZG5pZ2h0In0seyJDYXJkRGVmSWQiOiJTY29ybiJ9XX0=";

pub const LONG_CODE_TEXT: &str = "{\"Name\":\"Discard\",\"Cards\":[{\"CardDefId\":\"Apocalypse\"},{\"CardDefId\":\"Blade\"},{\"CardDefId\":\"ColleenWing\"},{\"CardDefId\":\"CorvusGlaive\"},{\"CardDefId\":\"Dracula\"},{\"CardDefId\":\"Gambit\"},{\"CardDefId\":\"Khonshu\"},{\"CardDefId\":\"LadySif\"},{\"CardDefId\":\"Modok\"},{\"CardDefId\":\"Morbius\"},{\"CardDefId\":\"ProximaMidnight\"},{\"CardDefId\":\"Scorn\"}]}";

fn card(
    card_def_id: &str,
    name: &str,
    short_name: &str,
    cost: &str,
    power: &str,
    description: &str,
    release_date: &str,
) -> Card {
    Card {
        card_def_id: card_def_id.to_string(),
        short_name: short_name.to_string(),
        name: name.to_string(),
        cost: cost.to_string(),
        power: power.to_string(),
        description: description.to_string(),
        release_date: release_date
            .parse::<DateTime<Utc>>()
            .expect("fixture release date"),
        obtainable: true,
    }
}

/// The discard deck, ordered by card id. This order intentionally differs
/// from the display order (cost, then name).
pub fn discard_deck_cards() -> Vec<Card> {
    vec![
        card(
            "Apocalypse",
            "Apocalypse",
            "ApclpsA",
            "6",
            "8",
            "When you discard this, put it back with +4 Power.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "Blade",
            "Blade",
            "Bld5",
            "1",
            "3",
            "On Reveal: Discard the rightmost card from your hand.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "ColleenWing",
            "Colleen Wing",
            "CllnWngB",
            "2",
            "3",
            "On Reveal: Discard the card that costs the least from your hand.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "CorvusGlaive",
            "Corvus Glaive",
            "CrvsGlvC",
            "3",
            "5",
            "On Reveal: Discard 2 cards from your hand to get +1 Max Energy.",
            "2024-02-20T19:00:00Z",
        ),
        card(
            "Dracula",
            "Dracula",
            "Drcl7",
            "4",
            "1",
            "At the end of the game, discard a card from your hand to gain its Power.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "Gambit",
            "Gambit",
            "Gmbt6",
            "3",
            "3",
            "On Reveal: Discard a card from your hand to destroy a random enemy card.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "Khonshu",
            "Khonshu",
            "Khnsh7",
            "6",
            "5",
            "On Reveal: Resurrect a card you discarded to another location.",
            "2025-03-25T19:00:00Z",
        ),
        card(
            "LadySif",
            "Lady Sif",
            "LdSf7",
            "3",
            "5",
            "On Reveal: Discard the card that costs the most from your hand.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "Modok",
            "M.O.D.O.K.",
            "Mdk5",
            "5",
            "7",
            "On Reveal: Discard your hand.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "Morbius",
            "Morbius",
            "Mrbs7",
            "2",
            "0",
            "Ongoing: +2 Power for each time you discarded a card this game.",
            "0001-01-01T00:00:00Z",
        ),
        card(
            "ProximaMidnight",
            "Proxima Midnight",
            "PrxmMdnghtF",
            "4",
            "7",
            "When this is discarded, jumps to your lowest-Power location.",
            "2024-02-27T19:00:00Z",
        ),
        card(
            "Scorn",
            "Scorn",
            "Scrn5",
            "1",
            "2",
            "When you discard this, put it back and give +2 Power to one of your cards in play.",
            "2024-10-15T19:00:00Z",
        ),
    ]
}

/// A card the discard deck does not contain.
pub fn off_deck_card() -> Card {
    card(
        "IronMan",
        "Iron Man",
        "IrnMn4",
        "5",
        "0",
        "Ongoing: Your total Power is doubled at this location.",
        "0001-01-01T00:00:00Z",
    )
}

/// Catalog holding the discard deck plus the off-deck card.
pub fn catalog() -> MemoryCatalog {
    let mut cards = discard_deck_cards();
    cards.push(off_deck_card());
    MemoryCatalog::new(cards)
}
