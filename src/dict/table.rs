//! Embedded syllable table.
//!
//! `[mappings]` keys are bare hexadecimal Unicode code points; values are
//! the canonical tone-marked pinyin syllable for that character.

pub const DEFAULT_TOML: &str = include_str!("pinyin_table.toml");
