//! Character-to-syllable dictionary.
//!
//! Maps a single Chinese character to its canonical tone-marked pinyin
//! syllable. The default table is embedded at compile time; a custom TOML
//! table can replace it before first use. Lookup is per character only —
//! multi-character words with context-dependent readings are out of scope.

mod config;
mod table;

pub use config::{parse_dict_toml, DictError};
pub use table::DEFAULT_TOML;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct SyllableDict {
    map: HashMap<char, String>,
}

impl SyllableDict {
    /// Set custom TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), DictError> {
        // Validate eagerly
        parse_dict_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| DictError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SyllableDict {
        static INSTANCE: OnceLock<SyllableDict> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let dict = SyllableDict::from_toml(toml_str).expect("syllable TOML must be valid");
            debug!(entries = dict.len(), "syllable dictionary initialized");
            dict
        })
    }

    /// Build a dictionary from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<SyllableDict, DictError> {
        Ok(SyllableDict {
            map: parse_dict_toml(toml_str)?,
        })
    }

    /// Tone-marked syllable for `c`, or `None` when the character is not
    /// pinyin-convertible.
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
