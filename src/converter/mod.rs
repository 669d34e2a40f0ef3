//! Chinese-to-pinyin conversion.
//!
//! Scans the input per code point, looks each character up in the syllable
//! dictionary, optionally strips tone marks and uppercases the first letter,
//! and joins the resulting segments with a configurable separator. Runs of
//! consecutive unmatched characters are copied through verbatim as single
//! segments.

mod segment;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::dict::SyllableDict;
use crate::tone::ToneTable;

pub use segment::{segment, Segment};

/// Tone-mark presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneMode {
    /// Keep the diacritics as stored in the dictionary: quán.
    Marked,
    /// Strip diacritics down to bare vowels: quan.
    #[default]
    Stripped,
}

/// Case presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Syllables as stored: quan.
    #[default]
    AsStored,
    /// First letter uppercased: Quan.
    FirstUpper,
}

/// Conversion options: tone-mark presentation, case presentation, and the
/// separator inserted between output segments.
///
/// Defaults to stripped tone marks, as-stored case, and a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub tone: ToneMode,
    pub case: CaseMode,
    pub separator: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            tone: ToneMode::default(),
            case: CaseMode::default(),
            separator: " ".to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tone(mut self, tone: ToneMode) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Convert `text` against the global syllable dictionary.
pub fn convert(text: &str, opts: &ConvertOptions) -> String {
    convert_with_dict(SyllableDict::global(), text, opts)
}

/// Convert `text` against an explicit dictionary.
///
/// Total: unmatched characters come through verbatim as literal runs, an
/// all-literal input joins to the input itself, and an empty input yields
/// an empty output.
pub fn convert_with_dict(dict: &SyllableDict, text: &str, opts: &ConvertOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("convert", chars = text.chars().count()).entered();
    let segments = segment(dict, text, opts);
    debug!(segment_count = segments.len());
    let parts: Vec<&str> = segments.iter().map(Segment::as_str).collect();
    parts.join(&opts.separator)
}

/// Transliterate one character per the active modes.
///
/// `None` when `c` has no dictionary entry. Tone stripping runs before the
/// case transform, which inspects the first character of the already
/// detoned syllable.
pub(crate) fn transliterate(dict: &SyllableDict, c: char, opts: &ConvertOptions) -> Option<String> {
    let syllable = dict.lookup(c)?;
    let syllable = match opts.tone {
        ToneMode::Marked => syllable.to_string(),
        ToneMode::Stripped => ToneTable::global().strip_str(syllable),
    };
    match opts.case {
        CaseMode::AsStored => Some(syllable),
        CaseMode::FirstUpper => Some(uppercase_first(&syllable)),
    }
}

/// Uppercase the first character of a syllable.
///
/// Syllables can begin with a tone-marked vowel (ā, é), so this goes
/// through `char::to_uppercase` rather than an ASCII arithmetic shift.
fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
