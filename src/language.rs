//! Supported languages

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A language with a bundled translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    Pt,
    Pl,
    Zh,
    De,
    Fr,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code '{0}'")]
pub struct UnknownLanguageError(pub String);

impl Language {
    /// Every supported language, in processing order.
    pub const ALL: [Self; 7] = [Self::En, Self::Es, Self::Pt, Self::Pl, Self::Zh, Self::De, Self::Fr];

    /// Code used as the message file stem, e.g. `pt` for `pt.json`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::Pl => "pl",
            Self::Zh => "zh",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| UnknownLanguageError(code.to_string()))
    }
}
