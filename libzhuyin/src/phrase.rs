//! Multi-syllable conversion and pronunciation rendering.
//!
//! Dictionary pinyin fields hold several syllables separated by spaces
//! (`"zhong1 guo2"`), occasionally by apostrophes (`"xi'an1"`). These helpers
//! split such a field and run each syllable through [`to_zhuyin`].
use once_cell::sync::Lazy;
use regex::Regex;

use hanzidict_core::{PinyinSource, Romanization};

use crate::convert::to_zhuyin;
use crate::error::ConversionError;

static SYLLABLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s'’]+").expect("separator pattern is valid"));

/// Split a pinyin field into syllables, dropping empty pieces.
///
/// ```
/// use libzhuyin::split_syllables;
///
/// assert_eq!(split_syllables(" zhong1  guo2 "), vec!["zhong1", "guo2"]);
/// assert_eq!(split_syllables("xi'an1"), vec!["xi", "an1"]);
/// ```
pub fn split_syllables(pinyin: &str) -> Vec<&str> {
    SYLLABLE_SEPARATOR
        .split(pinyin)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Convert every syllable of `pinyin`; syllables are joined with one space.
///
/// The first unrecognized syllable aborts the whole conversion.
pub fn phrase_to_zhuyin(pinyin: &str) -> Result<String, ConversionError> {
    let syllables = split_syllables(pinyin)
        .into_iter()
        .map(to_zhuyin)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(syllables.join(" "))
}

/// Like [`phrase_to_zhuyin`], but a syllable that cannot be converted is
/// kept as the original pinyin.
pub fn phrase_to_zhuyin_lossy(pinyin: &str) -> String {
    split_syllables(pinyin)
        .into_iter()
        .map(|syllable| match to_zhuyin(syllable) {
            Ok(zhuyin) => zhuyin,
            Err(err) => {
                tracing::debug!(%err, "keeping pinyin for unconvertible syllable");
                syllable.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The pronunciation of `record` as the user prefers to read it.
pub fn render_pronunciation<R>(record: &R, romanization: Romanization) -> String
where
    R: PinyinSource + ?Sized,
{
    match romanization {
        Romanization::Pinyin => record.pinyin().to_string(),
        Romanization::Zhuyin => phrase_to_zhuyin_lossy(record.pinyin()),
    }
}
