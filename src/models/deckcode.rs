use serde::{Deserialize, Serialize};

/// The decoded (non-base64) deckcode text, tagged by its wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Deckcode {
    /// Comma-separated list of card short names.
    Short(String),
    /// JSON document naming a deck and listing card identifiers.
    Long(String),
}

impl Deckcode {
    pub fn kind(&self) -> &'static str {
        match self {
            Deckcode::Short(_) => "short",
            Deckcode::Long(_) => "long",
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Deckcode::Short(payload) | Deckcode::Long(payload) => payload,
        }
    }
}

/// Long-form payload schema: a named deck listing card identifiers.
#[derive(Debug, Serialize, Deserialize)]
pub struct LongDeckPayload {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Cards")]
    pub cards: Vec<LongDeckCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LongDeckCard {
    #[serde(rename = "CardDefId")]
    pub card_def_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_tagged_union() {
        let deckcode = Deckcode::Short("Bld5,Scrn5".to_string());
        let json = serde_json::to_string(&deckcode).unwrap();
        assert_eq!(json, r#"{"kind":"short","payload":"Bld5,Scrn5"}"#);

        let back: Deckcode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deckcode);
    }

    #[test]
    fn exposes_kind_and_payload() {
        let deckcode = Deckcode::Long("{\"Name\":\"x\",\"Cards\":[]}".to_string());
        assert_eq!(deckcode.kind(), "long");
        assert_eq!(deckcode.payload(), "{\"Name\":\"x\",\"Cards\":[]}");
    }

    #[test]
    fn long_payload_schema_round_trips() {
        let payload: LongDeckPayload =
            serde_json::from_str(r#"{"Name":"Discard","Cards":[{"CardDefId":"Blade"}]}"#).unwrap();
        assert_eq!(payload.name, "Discard");
        assert_eq!(payload.cards[0].card_def_id, "Blade");
    }
}
