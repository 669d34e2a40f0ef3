use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::debug;

use crate::tone::ToneTable;
use crate::unicode::is_han;

#[derive(Deserialize)]
struct DictConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty syllable for key: {0}")]
    EmptyValue(String),
    #[error("more than one tone mark in syllable {syllable:?} for key {key}")]
    MultipleToneMarks { key: String, syllable: String },
    #[error("syllable dictionary already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a character → tone-marked-syllable map.
///
/// Keys are bare hexadecimal Unicode code points. A key that does not
/// decode to a scalar value drops its entry rather than failing the whole
/// build: an incomplete dictionary is usable, and unmatched characters fall
/// back to literal passthrough anyway. Malformed *values* do fail — an
/// empty or doubly tone-marked syllable would break the transforms
/// downstream.
pub fn parse_dict_toml(toml_str: &str) -> Result<HashMap<char, String>, DictError> {
    let config: DictConfig =
        toml::from_str(toml_str).map_err(|e| DictError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(DictError::Empty);
    }

    let tones = ToneTable::global();
    let mut map = HashMap::with_capacity(config.mappings.len());
    for (key, syllable) in config.mappings {
        let Some(c) = u32::from_str_radix(&key, 16).ok().and_then(char::from_u32) else {
            debug!(key = %key, "skipping entry with unparseable code point key");
            continue;
        };
        if syllable.is_empty() {
            return Err(DictError::EmptyValue(key));
        }
        if syllable.chars().filter(|&s| tones.contains(s)).count() > 1 {
            return Err(DictError::MultipleToneMarks { key, syllable });
        }
        if !is_han(c) {
            debug!(key = %key, "mapping key outside the Han blocks");
        }
        map.insert(c, syllable);
    }
    Ok(map)
}
