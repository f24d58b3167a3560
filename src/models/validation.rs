use std::fmt::Display;

use super::card::Card;
use crate::utils::errors::ValidationError;

/// Counting mode for deck composition checks.
///
/// # Variants
///
/// - `All` - every candidate must be in the deck.
/// - `None` - no candidate may be in the deck.
/// - `Exact` - exactly `exact_count` candidates must be in the deck.
/// - `Min` - at least `min_count` candidates must be in the deck.
/// - `Max` - at most `max_count` candidates may be in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    All,
    None,
    Exact,
    Min,
    Max,
}

impl Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ValidationMode::All => "all",
            ValidationMode::None => "none",
            ValidationMode::Exact => "exact",
            ValidationMode::Min => "min",
            ValidationMode::Max => "max",
        };

        write!(f, "{}", str)
    }
}

impl TryFrom<&str> for ValidationMode {
    type Error = ValidationError;

    /// Attempts to convert a mode string into a `ValidationMode`.
    ///
    /// Returns `ValidationError::InvalidMode` for anything that is not one
    /// of `all`, `none`, `exact`, `min`, `max`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "all" => Ok(ValidationMode::All),
            "none" => Ok(ValidationMode::None),
            "exact" => Ok(ValidationMode::Exact),
            "min" => Ok(ValidationMode::Min),
            "max" => Ok(ValidationMode::Max),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

/// Options for a composition check. The mode is always required; the
/// count field matching the mode must be supplied for `Exact`, `Min` and
/// `Max`.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    pub mode: ValidationMode,
    pub exact_count: Option<usize>,
    pub min_count: Option<usize>,
    pub max_count: Option<usize>,
}

impl ValidationOptions {
    fn with_mode(mode: ValidationMode) -> Self {
        Self {
            mode,
            exact_count: None,
            min_count: None,
            max_count: None,
        }
    }

    pub fn all() -> Self {
        Self::with_mode(ValidationMode::All)
    }

    pub fn none() -> Self {
        Self::with_mode(ValidationMode::None)
    }

    pub fn exact(count: usize) -> Self {
        Self {
            exact_count: Some(count),
            ..Self::with_mode(ValidationMode::Exact)
        }
    }

    pub fn min(count: usize) -> Self {
        Self {
            min_count: Some(count),
            ..Self::with_mode(ValidationMode::Min)
        }
    }

    pub fn max(count: usize) -> Self {
        Self {
            max_count: Some(count),
            ..Self::with_mode(ValidationMode::Max)
        }
    }
}

/// Outcome of a composition check. `found_cards` and `missing_cards`
/// partition the candidate list and together reconstruct it in original
/// order.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub found_count: usize,
    pub expected_count: usize,
    pub found_cards: Vec<Card>,
    pub missing_cards: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mode_strings() {
        assert_eq!(ValidationMode::try_from("all"), Ok(ValidationMode::All));
        assert_eq!(ValidationMode::try_from("none"), Ok(ValidationMode::None));
        assert_eq!(ValidationMode::try_from("exact"), Ok(ValidationMode::Exact));
        assert_eq!(ValidationMode::try_from("min"), Ok(ValidationMode::Min));
        assert_eq!(ValidationMode::try_from("max"), Ok(ValidationMode::Max));
    }

    #[test]
    fn rejects_unknown_mode_strings() {
        assert_eq!(
            ValidationMode::try_from("bogus"),
            Err(ValidationError::InvalidMode("bogus".to_string()))
        );
    }

    #[test]
    fn mode_displays_as_its_wire_name() {
        assert_eq!(ValidationMode::Exact.to_string(), "exact");
    }

    #[test]
    fn constructors_carry_their_count() {
        let options = ValidationOptions::min(2);
        assert_eq!(options.mode, ValidationMode::Min);
        assert_eq!(options.min_count, Some(2));
        assert_eq!(options.exact_count, None);
        assert_eq!(options.max_count, None);
    }
}
