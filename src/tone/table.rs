//! Parallel tone-mark tables.
//!
//! Row order is first through fourth tone. Column order is a e i o u ü
//! followed by the uppercase forms, and `BARE_VOWELS` shares that column
//! order across all four rows, with v standing in for ü.

pub(crate) const TONED_VOWELS: [[char; 12]; 4] = [
    ['ā', 'ē', 'ī', 'ō', 'ū', 'ǖ', 'Ā', 'Ē', 'Ī', 'Ō', 'Ū', 'Ǖ'],
    ['á', 'é', 'í', 'ó', 'ú', 'ǘ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ǘ'],
    ['ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǚ', 'Ǎ', 'Ě', 'Ǐ', 'Ǒ', 'Ǔ', 'Ǚ'],
    ['à', 'è', 'ì', 'ò', 'ù', 'ǜ', 'À', 'È', 'Ì', 'Ò', 'Ù', 'Ǜ'],
];

pub(crate) const BARE_VOWELS: [char; 12] =
    ['a', 'e', 'i', 'o', 'u', 'v', 'A', 'E', 'I', 'O', 'U', 'V'];
