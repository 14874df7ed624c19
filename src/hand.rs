//! Ordered card collection with shuffling, sorting, and grid mapping.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::LayoutError;
use crate::layout::{GridCoords, ROW_WIDTH};

/// An ordered sequence of cards representing the current display order.
///
/// The order is significant: it is the deal order on screen, not necessarily
/// sorted. [`Hand::shuffled`] and [`Hand::sorted`] return new hands and leave
/// the original untouched; [`Hand::sort`] reorders in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in display order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from an existing sequence, keeping its order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates the standard 52-card deck, suit-major with ascending rank.
    ///
    /// The construction order equals the sorted order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckgrid::Hand;
    ///
    /// let deck = Hand::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.sorted(), deck);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(suit, face));
            }
        }
        Self { cards }
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterates over the cards in display order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a new hand with the same cards in a uniformly random
    /// permutation. The original is untouched.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns a shuffled copy using a deterministic generator seeded with
    /// `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckgrid::Hand;
    ///
    /// let deck = Hand::standard();
    /// assert_eq!(deck.shuffled_with_seed(7), deck.shuffled_with_seed(7));
    /// ```
    #[must_use]
    pub fn shuffled_with_seed(&self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled(&mut rng)
    }

    /// Returns a new hand sorted by the card total order (suit-major,
    /// ascending rank). The sort is stable; the original is untouched.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort();
        Self { cards }
    }

    /// Sorts the hand in place, stably, by the card total order.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Grid position of the first occurrence of `card`, in rows of
    /// [`ROW_WIDTH`].
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the hand.
    pub fn coords_of(&self, card: Card) -> Result<GridCoords, LayoutError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(LayoutError::CardNotFound)?;
        Ok(GridCoords::at_index(index, ROW_WIDTH))
    }

    /// Partitions the hand into rows of `width` cards. The last row may be
    /// short; no card is dropped or duplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is zero.
    pub fn rows(&self, width: usize) -> Result<Vec<&[Card]>, LayoutError> {
        if width == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        Ok(self.cards.chunks(width).collect())
    }

    /// Returns whether any (face, suit) pair appears more than once.
    ///
    /// The model does not prevent duplicates; callers that need a proper
    /// deck can verify with this.
    #[must_use]
    pub fn contains_duplicate(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.cards.len());
        self.cards.iter().any(|&card| !seen.insert(card))
    }
}
