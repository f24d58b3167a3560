use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::models::deckcode::Deckcode;

/// Decoder for pasted tokens. Padding is accepted but not required;
/// tokens often arrive clipped out of chat messages.
const PASTED_TOKEN: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Extracts the deckcode embedded in raw shared text.
///
/// Lines whose trimmed form is empty, starts with `#`, or contains any
/// whitespace character are discarded; the survivors are concatenated in
/// order with no separator, trimmed, and base64-decoded. Decoded text
/// containing `{` classifies as long form before the non-empty check
/// classifies it as short form.
///
/// # Arguments
/// * `input` - Raw multi-line text as shared by a user.
///
/// # Returns
/// * `Some(Deckcode)` - The classified decoded payload.
/// * `None` - No usable token was embedded in the input.
pub fn extract(input: &str) -> Option<Deckcode> {
    let rawcode64: String = input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !trimmed.starts_with('#')
                && !trimmed.chars().any(char::is_whitespace)
        })
        .collect();

    let rawcode = decode_lenient(rawcode64.trim());

    if rawcode.contains('{') {
        return Some(Deckcode::Long(rawcode));
    } else if !rawcode.is_empty() {
        return Some(Deckcode::Short(rawcode));
    }

    None
}

/// Decodes the way lenient runtime decoders do: characters outside the
/// base64 alphabet are skipped, and anything still undecodable counts as
/// empty text rather than an error.
fn decode_lenient(code: &str) -> String {
    let cleaned: String = code
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    match PASTED_TOKEN.decode(cleaned.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}
