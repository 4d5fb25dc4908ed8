use crate::error::Result;
use crate::inflect::English;
use crate::Converter;
use serde::{Deserialize, Serialize};

/// Tokenizer options, selected per converter.
///
/// Deserializes from TOML with every field optional:
///
/// ```toml
/// preserve_case = false
/// acronym_lookback = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    /// Keep each letter's original case in the produced words. When off,
    /// words come out lowercased.
    #[serde(default = "default_preserve_case")]
    pub preserve_case: bool,

    /// Only split an uppercase run before its last letter (`HTMLTag`) when the
    /// letter two positions back is uppercase as well. With this on,
    /// `EThreader` stays a single word.
    #[serde(default)]
    pub acronym_lookback: bool,
}

fn default_preserve_case() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_case: default_preserve_case(),
            acronym_lookback: false,
        }
    }
}

impl Config {
    pub fn preserving() -> Self {
        Self::default()
    }

    pub fn erasing() -> Self {
        Self {
            preserve_case: false,
            ..Self::default()
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Layer `other` over `self`: any field `other` changed from its default wins.
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();
        if other.preserve_case != defaults.preserve_case {
            self.preserve_case = other.preserve_case;
        }
        if other.acronym_lookback != defaults.acronym_lookback {
            self.acronym_lookback = other.acronym_lookback;
        }
        self
    }

    /// Build a converter using these options and the built-in English inflector.
    pub fn converter(self) -> Converter<English> {
        Converter::new(self)
    }
}
