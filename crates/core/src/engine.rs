//! Move engine: folds a direction sequence over a starting position.

use crate::direction::{self, Direction, ParseError};
use crate::grid::{GridDimensions, Position};

/// Applies each direction in order, starting from `start`.
///
/// A candidate position outside `dimensions` is not an error: the move is
/// skipped with a warning naming the rejected direction and the position it
/// was attempted from, and the fold continues unchanged. The returned
/// position is always inside `dimensions` provided `start` was.
pub fn apply_moves(
    start: Position,
    dimensions: GridDimensions,
    directions: &[Direction],
) -> Position {
    directions.iter().fold(start, |position, &direction| {
        let candidate = position.step(direction);
        if dimensions.contains(candidate) {
            candidate
        } else {
            tracing::warn!("unable to move {direction} from {position}, ignoring direction");
            position
        }
    })
}

/// Parses a raw command string and applies the resulting moves.
///
/// The single entry point tying the codec and the move fold together: parse
/// errors propagate unchanged and no partial result is produced, while
/// rejected moves are skipped, never fatal.
pub fn run(
    start: Position,
    dimensions: GridDimensions,
    raw_input: &str,
) -> Result<Position, ParseError> {
    let directions = direction::parse_directions(raw_input)?;
    tracing::debug!(count = directions.len(), "parsed input directions");
    Ok(apply_moves(start, dimensions, &directions))
}
