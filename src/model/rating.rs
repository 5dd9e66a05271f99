/// Star rating definitions
///
/// Listing pages encode the rating as a class word (`star-rating Three`).
/// The set of words is closed; anything else is a data-shape error.
use crate::ScraperError;
use std::fmt;
use std::str::FromStr;

/// A book's star rating, one to five
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// All ratings in ascending order
    #[cfg(test)]
    const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    /// Returns the numeric star count
    pub fn value(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Returns the class word used by the catalogue markup
    #[cfg(test)]
    fn as_word(&self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
        }
    }
}

impl FromStr for Rating {
    type Err = ScraperError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "One" => Ok(Self::One),
            "Two" => Ok(Self::Two),
            "Three" => Ok(Self::Three),
            "Four" => Ok(Self::Four),
            "Five" => Ok(Self::Five),
            other => Err(ScraperError::UnrecognizedRating(other.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
