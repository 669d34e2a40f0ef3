//! Character-level Unicode classification for Chinese text.

/// Check the CJK Unified Ideographs blocks: the base block plus
/// Extension A and Extension B, which cover every key the syllable
/// table is expected to carry.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}
