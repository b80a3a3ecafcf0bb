//! Key-value representation of the model for consumers that don't speak XML.
//!
//! Keys are the lowercase element names of the NFO document without the
//! `game` root. Untagged text and unset creator permissions are omitted
//! exactly as in the XML output; a missing `creatorinfo` is written as
//! `null`. Keys missing on input take their default.

use crate::error::EncodingError;
use crate::model::Game;
use crate::DocumentFormat;

/// Pretty-printed JSON output.
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, game: &Game) -> Result<String, EncodingError> {
        to_json(game)
    }
}

/// Serialize `game` as pretty-printed JSON.
///
/// JSON has no literal for NaN or infinity, so a non-finite rating is an
/// error rather than a silent `null`.
pub fn to_json(game: &Game) -> Result<String, EncodingError> {
    if !game.rating.is_finite() {
        return Err(EncodingError::NonFiniteRating(game.rating));
    }
    Ok(serde_json::to_string_pretty(game)?)
}

/// Build a [`Game`] from its JSON representation.
pub fn from_json(input: &str) -> Result<Game, EncodingError> {
    Ok(serde_json::from_str(input)?)
}

/// Build a [`Game`] from a YAML document using the same keys as the JSON form.
pub fn from_yaml(input: &str) -> Result<Game, EncodingError> {
    Ok(serde_yml::from_str(input)?)
}

#[cfg(test)]
#[path = "tests/interchange_tests.rs"]
mod tests;
