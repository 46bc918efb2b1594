//! Deterministic warehouse robot simulation logic.
//!
//! `warehouse-core` defines the canonical rules of the simulation: the
//! direction command codec, grid geometry, and the move engine that folds a
//! command sequence into a final position. All APIs are pure and hold no
//! global state; diagnostics flow through the `tracing` facade and the
//! caller decides where they go.
pub mod direction;
pub mod engine;
pub mod grid;

pub use direction::{Direction, ParseError, parse_directions};
pub use engine::{apply_moves, run};
pub use grid::{GridDimensions, Position};
