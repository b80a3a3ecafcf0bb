/// Errors raised when a metadata document cannot be represented in (or read
/// from) one of its textual forms.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("I/O error while writing XML: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Character {ch:?} in <{element}> cannot be represented in XML")]
    InvalidChar { element: String, ch: char },

    #[error("Rating {0} is not a finite number")]
    NonFiniteRating(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

impl EncodingError {
    pub fn invalid_char(element: impl Into<String>, ch: char) -> Self {
        Self::InvalidChar {
            element: element.into(),
            ch,
        }
    }
}
