use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourSchemeKind {
    #[default]
    Classic,
    Fire,
    Ocean,
    Rainbow,
    Grayscale,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Fire,
        Self::Ocean,
        Self::Rainbow,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Rainbow => "rainbow",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourScheme(pub String);

impl fmt::Display for UnknownColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour scheme '{}'", self.0)
    }
}

impl Error for UnknownColourScheme {}

impl FromStr for ColourSchemeKind {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourScheme(s.to_string()))
    }
}
