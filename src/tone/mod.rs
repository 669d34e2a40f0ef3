//! Tone-mark stripping for pinyin syllables.
//!
//! A fixed table maps each of the 48 tone-marked vowel characters (four
//! tones × a e i o u ü × both cases) to its bare form. Characters outside
//! the table pass through unchanged, so stripping is total over arbitrary
//! strings and never changes the character count.

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use table::{BARE_VOWELS, TONED_VOWELS};

pub struct ToneTable {
    map: HashMap<char, char>,
}

impl ToneTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static ToneTable {
        static INSTANCE: OnceLock<ToneTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut map = HashMap::with_capacity(TONED_VOWELS.len() * BARE_VOWELS.len());
            for row in &TONED_VOWELS {
                for (i, &toned) in row.iter().enumerate() {
                    map.insert(toned, BARE_VOWELS[i]);
                }
            }
            ToneTable { map }
        })
    }

    /// Bare form of `c`, or `c` itself when it carries no tone mark.
    pub fn strip_char(&self, c: char) -> char {
        self.map.get(&c).copied().unwrap_or(c)
    }

    /// Strip every tone mark in `s`. Substitution is one-to-one per
    /// character, so the result has the same char count as the input.
    pub fn strip_str(&self, s: &str) -> String {
        s.chars().map(|c| self.strip_char(c)).collect()
    }

    /// Whether `c` is one of the 48 tone-marked vowel characters.
    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }
}
