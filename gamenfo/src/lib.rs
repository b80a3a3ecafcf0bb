//! Game metadata documents and their NFO (XML) rendering.
//!
//! A [`Game`] is filled in by the caller and handed to [`render`], which
//! produces the XML text. The same model also has a JSON form (see
//! [`interchange`]). Neither operation touches the filesystem; writing the
//! result somewhere is up to the caller.

pub mod error;
pub mod interchange;
pub mod model;
pub mod nfo;

pub use error::EncodingError;
pub use interchange::{JsonFormat, from_json, from_yaml, to_json};
pub use model::{
    CountryDate, CreatorInfo, Dlc, Game, LangText, Platform, Timestamp, zero_timestamp,
};
pub use nfo::{NfoFormat, XML_HEADER, render};

/// A textual representation a [`Game`] can be rendered into.
pub trait DocumentFormat {
    /// Short identifier used to select the format (e.g. `"nfo"`).
    fn name(&self) -> &'static str;

    /// File extension conventionally used for documents in this format.
    fn file_extension(&self) -> &'static str;

    /// Render the game. Pure: the same input always yields the same text.
    fn render(&self, game: &Game) -> Result<String, EncodingError>;
}

/// Every available output format, NFO first.
pub fn all_formats() -> Vec<Box<dyn DocumentFormat>> {
    vec![Box::new(NfoFormat::new()), Box::new(JsonFormat::new())]
}

/// Look up a format by its [`DocumentFormat::name`], ignoring case.
pub fn format_by_name(name: &str) -> Option<Box<dyn DocumentFormat>> {
    all_formats()
        .into_iter()
        .find(|format| format.name().eq_ignore_ascii_case(name))
}
