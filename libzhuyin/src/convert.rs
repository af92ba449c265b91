// libzhuyin/src/convert.rs
//
// Pinyin → zhuyin transliteration of a single syllable.
//
// The input is segmented greedily: at each position the longest table unit
// that prefixes the remaining input is emitted and consumed. A syllable body
// is always longer than a tone digit, so "ma5" splits as "ma" + "5" and
// "zhuang1" as "zhuang" + "1", never "zhu" + "ang" + "1".
//
// Dictionary sources spell ü several ways ("lü4", "lu:4", "lv4", a
// decomposed u + U+0308). Input is normalized to the table's spelling before
// matching.

use std::borrow::Cow;

use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

use crate::error::ConversionError;
use crate::table::SyllableTable;

/// Convert one tone-numbered pinyin syllable to zhuyin.
///
/// # Examples
/// ```
/// use libzhuyin::to_zhuyin;
///
/// assert_eq!(to_zhuyin("zhong1").unwrap(), "ㄓㄨㄥ");
/// assert_eq!(to_zhuyin("ma5").unwrap(), "ㄇㄚ˙");
/// assert_eq!(to_zhuyin("lv4").unwrap(), "ㄌㄩˋ");
/// assert!(to_zhuyin("xyz9").is_err());
/// ```
pub fn to_zhuyin(syllable: &str) -> Result<String, ConversionError> {
    to_zhuyin_with(SyllableTable::global(), syllable)
}

/// Same as [`to_zhuyin`] against an explicit table.
pub fn to_zhuyin_with(table: &SyllableTable, syllable: &str) -> Result<String, ConversionError> {
    let normalized = normalize_syllable(syllable);
    let mut rest: &str = &normalized;
    let mut out = String::with_capacity(rest.len() * 3);

    while !rest.is_empty() {
        match table.longest_prefix(rest) {
            Some((unit, zhuyin)) => {
                out.push_str(zhuyin);
                rest = &rest[unit.len()..];
            }
            None => return Err(ConversionError::unrecognized(syllable, rest)),
        }
    }

    Ok(out)
}

/// Bring a syllable to the table's spelling: NFC, lowercase, `u:`/`v` → `ü`.
///
/// Whitespace is kept; it is not part of any unit, so conversion rejects it.
/// Already-canonical input is returned borrowed.
pub fn normalize_syllable(syllable: &str) -> Cow<'_, str> {
    let canonical = syllable
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == 'ü')
        && !syllable.contains('v');
    if canonical {
        return Cow::Borrowed(syllable);
    }

    let composed: String = match is_nfc_quick(syllable.chars()) {
        IsNormalized::Yes => syllable.to_string(),
        _ => syllable.nfc().collect(),
    };
    Cow::Owned(
        composed
            .to_lowercase()
            .replace("u:", "ü")
            .replace('v', "ü"),
    )
}
