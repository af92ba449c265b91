//! Dictionary record types.
//!
//! The record store lives outside this crate. Consumers that only need a
//! pronunciation read it through [`PinyinSource`]; `DictEntry` is a plain
//! owned record for callers that have nothing better.
use serde::{Deserialize, Serialize};

use crate::config::HanziForm;

/// Anything carrying a tone-numbered pinyin field such as `"zhong1 guo2"`.
pub trait PinyinSource {
    fn pinyin(&self) -> &str;
}

impl PinyinSource for str {
    fn pinyin(&self) -> &str {
        self
    }
}

impl PinyinSource for String {
    fn pinyin(&self) -> &str {
        self
    }
}

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub simplified: String,
    pub traditional: String,
    /// Space separated syllables with trailing tone digits.
    pub pinyin: String,
    pub translations: Vec<String>,
}

impl DictEntry {
    pub fn new<S: Into<String>>(simplified: S, traditional: S, pinyin: S) -> Self {
        Self {
            simplified: simplified.into(),
            traditional: traditional.into(),
            pinyin: pinyin.into(),
            translations: Vec::new(),
        }
    }

    pub fn with_translation<S: Into<String>>(mut self, translation: S) -> Self {
        self.translations.push(translation.into());
        self
    }

    /// The headword in the preferred form.
    pub fn headword(&self, form: HanziForm) -> &str {
        match form {
            HanziForm::Traditional => &self.traditional,
            HanziForm::Simplified => &self.simplified,
        }
    }

    /// The headword in the other form, when it differs from the preferred one.
    pub fn alternate_headword(&self, form: HanziForm) -> Option<&str> {
        (self.simplified != self.traditional).then(|| match form {
            HanziForm::Traditional => self.simplified.as_str(),
            HanziForm::Simplified => self.traditional.as_str(),
        })
    }
}

impl PinyinSource for DictEntry {
    fn pinyin(&self) -> &str {
        &self.pinyin
    }
}
