//! The six fixed classification levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static ORDERED: [Level; Level::COUNT] = Level::ALL;

/// Classification rank, ordered from the root of the tree downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
}

impl Level {
    /// Number of classification levels
    pub const COUNT: usize = 6;

    /// All levels in cascade order
    pub const ALL: [Level; Level::COUNT] = [
        Level::Kingdom,
        Level::Phylum,
        Level::Class,
        Level::Order,
        Level::Family,
        Level::Genus,
    ];

    /// Zero-based position in the cascade
    pub fn index(self) -> usize {
        self as usize
    }

    /// Level at the given position, if any
    pub fn from_index(index: usize) -> Option<Level> {
        Level::ALL.get(index).copied()
    }

    /// The level directly below this one (None for Genus)
    pub fn next(self) -> Option<Level> {
        Level::from_index(self.index() + 1)
    }

    pub fn is_last(self) -> bool {
        self == Level::Genus
    }

    /// All levels strictly before this one
    pub fn preceding(self) -> &'static [Level] {
        &ORDERED[..self.index()]
    }

    /// All levels strictly after this one
    pub fn following(self) -> &'static [Level] {
        &ORDERED[self.index() + 1..]
    }

    /// English rank label ("Kingdom", "Phylum", ...)
    pub fn label_en(self) -> &'static str {
        match self {
            Level::Kingdom => "Kingdom",
            Level::Phylum => "Phylum",
            Level::Class => "Class",
            Level::Order => "Order",
            Level::Family => "Family",
            Level::Genus => "Genus",
        }
    }

    /// Arabic rank label
    pub fn label_ar(self) -> &'static str {
        match self {
            Level::Kingdom => "مملكة",
            Level::Phylum => "شعبة",
            Level::Class => "صف",
            Level::Order => "رتبة",
            Level::Family => "فصيلة",
            Level::Genus => "جنس",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_en())
    }
}

/// Returned when a string names no classification level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.label_en().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order_and_navigation() {
        assert_eq!(Level::Kingdom.index(), 0);
        assert_eq!(Level::Genus.index(), 5);
        assert_eq!(Level::Kingdom.next(), Some(Level::Phylum));
        assert_eq!(Level::Genus.next(), None);
        assert!(Level::Genus.is_last());
        assert!(!Level::Family.is_last());
    }

    #[test]
    fn test_preceding_and_following() {
        assert!(Level::Kingdom.preceding().is_empty());
        assert_eq!(Level::Class.preceding(), &[Level::Kingdom, Level::Phylum]);
        assert_eq!(Level::Family.following(), &[Level::Genus]);
        assert!(Level::Genus.following().is_empty());
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!("order".parse::<Level>().unwrap(), Level::Order);
        assert_eq!(" GENUS ".parse::<Level>().unwrap(), Level::Genus);
        assert!("species".parse::<Level>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Level::Kingdom.label_ar(), "مملكة");
        assert_eq!(Level::Phylum.to_string(), "Phylum");
    }
}
