//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The face is not one of `2`-`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown face")]
    UnknownFace,
    /// The suit is not one of `S`, `D`, `H`, `C`.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when mapping cards onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The card is not present in the hand.
    #[error("card not found in hand")]
    CardNotFound,
    /// The row width is zero.
    #[error("row width is zero")]
    ZeroWidth,
}
