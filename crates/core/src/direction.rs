//! Direction command codec.
//!
//! Bidirectional mapping between single-letter command tokens and the
//! [`Direction`] type, plus the whitespace-separated batch parser used by
//! the move engine.

use std::fmt;

/// Cardinal grid movement command. Each step covers a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in canonical token order (`N`, `E`, `S`, `W`).
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Maps a single-letter command token to its direction.
    ///
    /// Case-sensitive and performs no trimming: anything other than exactly
    /// `"N"`, `"E"`, `"S"` or `"W"` yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    /// Canonical single-letter token for this direction.
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// Unit translation `(dx, dy)` applied by one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// The direction that undoes one step in this direction.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid direction: {token}")]
    InvalidDirection { token: String },
}

/// Parses a whitespace-separated command string into an ordered direction
/// sequence.
///
/// Splits on runs of whitespace and discards empty tokens, so leading,
/// trailing, and repeated whitespace are all accepted. Stops at the first
/// token that does not name a direction and reports it; empty or
/// all-whitespace input yields an empty sequence.
pub fn parse_directions(input: &str) -> Result<Vec<Direction>, ParseError> {
    input
        .split_whitespace()
        .map(|token| {
            Direction::from_token(token).ok_or_else(|| ParseError::InvalidDirection {
                token: token.to_owned(),
            })
        })
        .collect()
}
