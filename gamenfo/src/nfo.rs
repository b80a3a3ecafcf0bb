use std::borrow::Cow;

use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use crate::error::EncodingError;
use crate::model::{CountryDate, CreatorInfo, Dlc, Game, LangText, Platform, Timestamp};
use crate::DocumentFormat;

/// Declaration line that starts every NFO document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// NFO (XML) output, one tab of indentation per nesting level.
pub struct NfoFormat;

impl NfoFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NfoFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormat for NfoFormat {
    fn name(&self) -> &'static str {
        "nfo"
    }

    fn file_extension(&self) -> &'static str {
        "nfo"
    }

    fn render(&self, game: &Game) -> Result<String, EncodingError> {
        render(game)
    }
}

impl Game {
    /// Render this game as an NFO document. See [`render`].
    pub fn to_nfo(&self) -> Result<String, EncodingError> {
        render(self)
    }
}

/// Render `game` as an XML document prefixed with [`XML_HEADER`].
///
/// Sequences keep their order. Untagged [`LangText`] values get no `lang`
/// attribute, a missing [`CreatorInfo`] produces no `<creatorinfo>` block
/// and empty `icon`/`thumb` values are skipped. Nothing is returned if any
/// value cannot be represented.
pub fn render(game: &Game) -> Result<String, EncodingError> {
    if !game.rating.is_finite() {
        return Err(EncodingError::NonFiniteRating(game.rating));
    }

    let mut writer = NfoWriter::new();
    writer.game(game)?;
    let body = writer.finish()?;

    log::debug!(
        "Rendered NFO with {} title(s), {} release platform(s), {} DLC(s): {} bytes",
        game.title.len(),
        game.release.len(),
        game.dlcs.len(),
        XML_HEADER.len() + body.len(),
    );

    Ok(format!("{XML_HEADER}{body}"))
}

struct NfoWriter {
    xml: Writer<Vec<u8>>,
}

impl NfoWriter {
    fn new() -> Self {
        Self {
            xml: Writer::new_with_indent(Vec::new(), b'\t', 1),
        }
    }

    fn finish(self) -> Result<String, EncodingError> {
        Ok(String::from_utf8(self.xml.into_inner())?)
    }

    fn game(&mut self, game: &Game) -> Result<(), EncodingError> {
        self.start("game", None)?;
        self.lang_texts("title", &game.title)?;
        for platform in &game.release {
            self.platform(platform)?;
        }
        self.strings("genre", &game.genre)?;
        self.strings("developer", &game.developers)?;
        self.strings("publisher", &game.publishers)?;
        self.lang_texts("plot", &game.plot)?;
        self.text_element("rating", None, &format_rating(game.rating))?;
        self.lang_texts("agerating", &game.age_rating)?;
        if !game.icon.is_empty() {
            self.text_element("icon", None, &game.icon)?;
        }
        if !game.thumbnail.is_empty() {
            self.text_element("thumb", None, &game.thumbnail)?;
        }
        if let Some(ref info) = game.creator_info {
            self.creator_info(info)?;
        }
        for dlc in &game.dlcs {
            self.dlc(dlc)?;
        }
        self.text_element("created", None, &format_timestamp(&game.created_at))?;
        self.text_element("updated", None, &format_timestamp(&game.updated_at))?;
        self.end("game")
    }

    fn platform(&mut self, platform: &Platform) -> Result<(), EncodingError> {
        self.start("release", None)?;
        self.text_element("platform", None, &platform.platform)?;
        for date in &platform.releases {
            self.country_date("releases", date)?;
        }
        self.end("release")
    }

    fn creator_info(&mut self, info: &CreatorInfo) -> Result<(), EncodingError> {
        if info.is_empty() {
            self.xml
                .write_event(Event::Empty(BytesStart::new("creatorinfo")))?;
            return Ok(());
        }

        self.start("creatorinfo", None)?;
        let flags = [
            ("stream", info.streaming_allowed),
            ("vod", info.video_on_demand_allowed),
            ("musicusage", info.music_usage_allowed),
            ("monetisation", info.monetisation_allowed),
        ];
        for (tag, allowed) in flags {
            if allowed {
                self.text_element(tag, None, "true")?;
            }
        }
        if !info.additional_info.is_empty() {
            self.text_element("additionalinfo", None, &info.additional_info)?;
        }
        self.end("creatorinfo")
    }

    fn dlc(&mut self, dlc: &Dlc) -> Result<(), EncodingError> {
        self.start("dlcs", None)?;
        self.lang_texts("title", &dlc.title)?;
        self.country_date("releasedate", &dlc.release_date)?;
        self.strings("developer", &dlc.developers)?;
        self.strings("publisher", &dlc.publishers)?;
        self.lang_texts("plot", &dlc.plot)?;
        self.lang_texts("agerating", &dlc.age_rating)?;
        self.end("dlcs")
    }

    fn country_date(&mut self, tag: &str, date: &CountryDate) -> Result<(), EncodingError> {
        self.text_element(
            tag,
            Some(("country", date.country.as_str())),
            &format_timestamp(&date.date),
        )
    }

    fn lang_texts(&mut self, tag: &str, texts: &[LangText]) -> Result<(), EncodingError> {
        for text in texts {
            let lang = text.has_lang().then_some(("lang", text.lang.as_str()));
            self.text_element(tag, lang, &text.value)?;
        }
        Ok(())
    }

    fn strings(&mut self, tag: &str, values: &[String]) -> Result<(), EncodingError> {
        for value in values {
            self.text_element(tag, None, value)?;
        }
        Ok(())
    }

    fn text_element(
        &mut self,
        tag: &str,
        attr: Option<(&str, &str)>,
        text: &str,
    ) -> Result<(), EncodingError> {
        check_xml_chars(tag, text)?;
        self.start(tag, attr)?;
        self.xml
            .write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
        self.end(tag)
    }

    fn start(&mut self, tag: &str, attr: Option<(&str, &str)>) -> Result<(), EncodingError> {
        let mut start = BytesStart::new(tag);
        if let Some((key, value)) = attr {
            check_xml_chars(tag, value)?;
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape_attribute(value).into_bytes()),
            });
        }
        self.xml.write_event(Event::Start(start))?;
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<(), EncodingError> {
        self.xml.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

/// Reject characters outside the XML 1.0 `Char` production; no escape form
/// exists for them.
fn check_xml_chars(element: &str, value: &str) -> Result<(), EncodingError> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(ch) => Err(EncodingError::invalid_char(element, ch)),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape element text. `\r` becomes a character reference so parsers
/// don't fold it into `\n` during line-ending normalization.
fn escape_text(value: &str) -> String {
    escape(value).replace('\r', "&#xD;")
}

/// Escape an attribute value. Attribute-value normalization turns literal
/// tabs and line breaks into spaces, so all three are written as references.
fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\t', "&#x9;")
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
}

/// Shortest digits that read back as the same value. Exponents below -4 or
/// at 6 and above switch to scientific form with a signed, two-digit
/// exponent (`4.5`, `0`, `1.5e+06`, `1e-07`).
fn format_rating(rating: f64) -> String {
    let sci = format!("{rating:e}");
    let exp = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));

    match exp {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        _ => rating.to_string(),
    }
}

/// RFC 3339, `Z` for UTC, fractional seconds only when present.
fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
#[path = "tests/nfo_tests.rs"]
mod tests;
