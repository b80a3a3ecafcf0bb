//! Data model for a game metadata document.
//!
//! These types describe one title: localized names, per-platform release
//! dates, credits, plot, ratings, creator permissions and DLC. Field names
//! on the wire are fixed: the NFO writer in [`crate::nfo`] and the JSON
//! representation in [`crate::interchange`] both use the same lowercase
//! names (`developer`, `agerating`, `thumb`, ...).

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A date-time together with the offset it was recorded in.
pub type Timestamp = DateTime<FixedOffset>;

/// The value used for dates that were never set: the Unix epoch in UTC.
pub fn zero_timestamp() -> Timestamp {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ── Game ────────────────────────────────────────────────────────────────────

/// The complete metadata record for one title. Rendered as `<game>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    /// Localized titles, in the order they should be listed.
    pub title: Vec<LangText>,
    /// One entry per platform the game shipped on.
    pub release: Vec<Platform>,
    pub genre: Vec<String>,
    #[serde(rename = "developer")]
    pub developers: Vec<String>,
    #[serde(rename = "publisher")]
    pub publishers: Vec<String>,
    pub plot: Vec<LangText>,
    pub rating: f64,
    /// Age-rating labels; these differ per locale and rating authority.
    #[serde(rename = "agerating")]
    pub age_rating: Vec<LangText>,
    /// Opaque reference to the icon image.
    pub icon: String,
    /// Opaque reference to the thumbnail image.
    #[serde(rename = "thumb")]
    pub thumbnail: String,
    /// Usage permissions granted by the creator, if any were stated.
    #[serde(rename = "creatorinfo")]
    pub creator_info: Option<CreatorInfo>,
    pub dlcs: Vec<Dlc>,
    #[serde(rename = "created")]
    pub created_at: Timestamp,
    #[serde(rename = "updated")]
    pub updated_at: Timestamp,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            title: Vec::new(),
            release: Vec::new(),
            genre: Vec::new(),
            developers: Vec::new(),
            publishers: Vec::new(),
            plot: Vec::new(),
            rating: 0.0,
            age_rating: Vec::new(),
            icon: String::new(),
            thumbnail: String::new(),
            creator_info: None,
            dlcs: Vec::new(),
            created_at: zero_timestamp(),
            updated_at: zero_timestamp(),
        }
    }
}

// ── Release dates ───────────────────────────────────────────────────────────

/// A distribution platform and its per-country release dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub platform: String,
    pub releases: Vec<CountryDate>,
}

impl Platform {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            releases: Vec::new(),
        }
    }

    /// Append a release date for `country`.
    pub fn release(mut self, country: impl Into<String>, date: Timestamp) -> Self {
        self.releases.push(CountryDate::new(country, date));
        self
    }
}

/// A release date scoped to one country or region.
///
/// The country is written as an attribute and the date as element text:
/// `<releases country="JP">1998-11-21T00:00:00+09:00</releases>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryDate {
    pub country: String,
    pub date: Timestamp,
}

impl CountryDate {
    pub fn new(country: impl Into<String>, date: Timestamp) -> Self {
        Self {
            country: country.into(),
            date,
        }
    }
}

impl Default for CountryDate {
    fn default() -> Self {
        Self {
            country: String::new(),
            date: zero_timestamp(),
        }
    }
}

// ── Localized text ──────────────────────────────────────────────────────────

/// A string with an optional language tag.
///
/// An empty `lang` means "untagged" and is left out of both representations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangText {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,
    #[serde(default)]
    pub value: String,
}

impl LangText {
    /// Untagged text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            lang: String::new(),
            value: value.into(),
        }
    }

    pub fn with_lang(lang: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            value: value.into(),
        }
    }

    pub fn has_lang(&self) -> bool {
        !self.lang.is_empty()
    }
}

// ── Creator permissions ─────────────────────────────────────────────────────

/// Usage permissions granted by the content creator.
///
/// Each field is omitted on output when false or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorInfo {
    #[serde(rename = "stream", skip_serializing_if = "is_false")]
    pub streaming_allowed: bool,
    #[serde(rename = "vod", skip_serializing_if = "is_false")]
    pub video_on_demand_allowed: bool,
    #[serde(rename = "musicusage", skip_serializing_if = "is_false")]
    pub music_usage_allowed: bool,
    #[serde(rename = "monetisation", skip_serializing_if = "is_false")]
    pub monetisation_allowed: bool,
    #[serde(rename = "additionalinfo", skip_serializing_if = "String::is_empty")]
    pub additional_info: String,
}

impl CreatorInfo {
    /// True when no permission is granted and there are no notes.
    pub fn is_empty(&self) -> bool {
        !self.streaming_allowed
            && !self.video_on_demand_allowed
            && !self.music_usage_allowed
            && !self.monetisation_allowed
            && self.additional_info.is_empty()
    }
}

// ── DLC ─────────────────────────────────────────────────────────────────────

/// A downloadable-content add-on. Unlike [`Game`], a DLC has exactly one
/// release event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dlc {
    pub title: Vec<LangText>,
    #[serde(rename = "releasedate")]
    pub release_date: CountryDate,
    #[serde(rename = "developer")]
    pub developers: Vec<String>,
    #[serde(rename = "publisher")]
    pub publishers: Vec<String>,
    pub plot: Vec<LangText>,
    #[serde(rename = "agerating")]
    pub age_rating: Vec<LangText>,
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
