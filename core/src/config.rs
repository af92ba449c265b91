//! Display preferences handed to the dictionary layer.
//!
//! Two options are recognized: the romanization used to show pronunciations
//! and the hanzi form used for headwords. Both are resolved here, so unknown
//! or empty values never reach the rest of the system: they fall back to the
//! defaults (`zhuyin`, `traditional`).
//!
//! # Example
//!
//! ```rust
//! use hanzidict_core::{DisplayConfig, HanziForm, Romanization};
//!
//! let cfg = DisplayConfig::from_toml_str("romanization = \"pinyin\"").unwrap();
//! assert_eq!(cfg.romanization, Romanization::Pinyin);
//! assert_eq!(cfg.hanzi_form, HanziForm::Traditional);
//! ```
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Romanization {
    Pinyin,
    #[default]
    Zhuyin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HanziForm {
    #[default]
    Traditional,
    Simplified,
}

/// Returned when a preference value names no known option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

impl Romanization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Romanization::Pinyin => "pinyin",
            Romanization::Zhuyin => "zhuyin",
        }
    }

    /// Parse leniently: anything unrecognized becomes the default.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl HanziForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HanziForm::Traditional => "traditional",
            HanziForm::Simplified => "simplified",
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Romanization {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pinyin" => Ok(Romanization::Pinyin),
            "zhuyin" | "bopomofo" => Ok(Romanization::Zhuyin),
            _ => Err(UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for HanziForm {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traditional" => Ok(HanziForm::Traditional),
            "simplified" => Ok(HanziForm::Simplified),
            _ => Err(UnknownOption(s.to_string())),
        }
    }
}

impl fmt::Display for Romanization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HanziForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Romanization {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

impl From<Romanization> for String {
    fn from(value: Romanization) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for HanziForm {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

impl From<HanziForm> for String {
    fn from(value: HanziForm) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How pronunciations are shown.
    pub romanization: Romanization,
    /// Which headword form is shown first.
    pub hanzi_form: HanziForm,
}

impl DisplayConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            romanization = %config.romanization,
            hanzi_form = %config.hanzi_form,
            "loaded display config"
        );
        Ok(config)
    }

    /// Save configuration to a TOML file, replacing any existing file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self
            .to_toml_string()
            .context("serializing display config")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved display config");
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_traditional_and_zhuyin() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.romanization, Romanization::Zhuyin);
        assert_eq!(cfg.hanzi_form, HanziForm::Traditional);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PinYin".parse::<Romanization>(), Ok(Romanization::Pinyin));
        assert_eq!(" Simplified\n".parse::<HanziForm>(), Ok(HanziForm::Simplified));
        let err = "wade-giles".parse::<Romanization>().unwrap_err();
        assert_eq!(err, UnknownOption("wade-giles".to_string()));
        assert_eq!(err.to_string(), "unknown option 'wade-giles'");
    }

    #[test]
    fn gibberish_falls_back_to_default() {
        assert_eq!(Romanization::parse_or_default(""), Romanization::Zhuyin);
        assert_eq!(Romanization::parse_or_default("klingon"), Romanization::Zhuyin);
        assert_eq!(HanziForm::parse_or_default("both"), HanziForm::Traditional);
    }

    #[test]
    fn toml_missing_and_unknown_fields() {
        let cfg = DisplayConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, DisplayConfig::default());

        let cfg = DisplayConfig::from_toml_str("hanzi_form = \"nonsense\"\nromanization = \"pinyin\"")
            .unwrap();
        assert_eq!(cfg.hanzi_form, HanziForm::Traditional);
        assert_eq!(cfg.romanization, Romanization::Pinyin);
    }

    #[test]
    fn toml_string_roundtrip() {
        let cfg = DisplayConfig {
            romanization: Romanization::Pinyin,
            hanzi_form: HanziForm::Simplified,
        };
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("romanization = \"pinyin\""));
        assert_eq!(DisplayConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
