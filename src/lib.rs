//! A 52-card deck laid out on a 2D grid, with shuffle and sort transitions.
//!
//! The crate provides the deck data model ([`Card`], [`Hand`]), pure grid
//! layout math, and a toolkit-free [`Scene`] state machine that animates
//! cards between centered, sorted, and shuffled layouts. A rendering layer
//! (or the bundled console demo) consumes positions; nothing here draws.
//!
//! # Example
//!
//! ```
//! use deckgrid::Hand;
//!
//! let deck = Hand::standard();
//! let shuffled = deck.shuffled_with_seed(42);
//! assert_eq!(shuffled.sorted(), deck);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod layout;
pub mod scene;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use error::{LayoutError, ParseCardError};
pub use hand::Hand;
pub use layout::{GridCoords, Point, ROW_WIDTH};
pub use scene::{Scene, ViewEvent, ViewState};
