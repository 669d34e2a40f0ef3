
use crate::dict::SyllableDict;

/// Small hand-built dictionary covering the scenarios below.
pub(crate) fn test_dict() -> SyllableDict {
    SyllableDict::from_toml(
        r#"
[mappings]
4f60 = "nǐ"
597d = "hǎo"
4e2d = "zhōng"
56fd = "guó"
7eff = "lǜ"
5417 = "ma"
"#,
    )
    .unwrap()
}
