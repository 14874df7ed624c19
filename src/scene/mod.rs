//! Toolkit-free presentation core: the view state machine, per-card
//! animation targets, and the idle auto-sort timer.
//!
//! A [`Scene`] owns a fixed deal order (one slot per card sprite) and a
//! display order that changes on shuffle and sort. Each transition retargets
//! every card's tween to the pixel position of its cell in the display
//! order, with per-card staggered durations. A rendering layer only has to
//! call [`Scene::tick`] and draw the cards at [`Scene::positions`].

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::hand::Hand;
use crate::layout::{self, GridCoords, Point, ROW_WIDTH};

mod state;
mod tween;

pub use state::{ViewEvent, ViewState};
pub use tween::{Tween, ease_in_out_back};

/// Animation duration for the first card, in milliseconds.
pub const BASE_ANIM_MS: u32 = 500;
/// Additional duration per card index, staggering the motion.
pub const ANIM_STAGGER_MS: u32 = 15;
/// Idle delay before the scene sorts itself, in milliseconds.
pub const IDLE_SORT_DELAY_MS: u32 = 125;

/// Drives card positions through centered, sorted, and shuffled layouts.
///
/// # Example
///
/// ```
/// use deckgrid::{Hand, Scene, ViewState};
///
/// let mut scene = Scene::new(Hand::standard());
/// assert_eq!(scene.state(), ViewState::Centered);
///
/// scene.sort();
/// while !scene.is_settled() {
///     scene.tick(16);
/// }
/// assert_eq!(scene.state(), ViewState::Sorted);
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    /// Cards in sprite order; never reordered after construction.
    deck: Hand,
    /// Current display order driving target positions.
    display: Hand,
    /// One tween per card, in `deck` order.
    tweens: Vec<Tween>,
    /// Current view state.
    state: ViewState,
    /// Time since construction with no interaction, in milliseconds.
    idle_ms: u32,
    /// Whether any event (or the idle timeout) has fired.
    interacted: bool,
}

impl Scene {
    /// Creates a scene with every card parked on the center slot.
    #[must_use]
    pub fn new(deck: Hand) -> Self {
        let center = layout::pixel_position(center_slot(deck.len()));
        let tweens = deck.iter().map(|_| Tween::settled(center)).collect();
        let display = deck.clone();
        Self {
            deck,
            display,
            tweens,
            state: ViewState::Centered,
            idle_ms: 0,
            interacted: false,
        }
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> ViewState {
        self.state
    }

    /// The fixed deal order the scene was created with.
    #[must_use]
    pub const fn deck(&self) -> &Hand {
        &self.deck
    }

    /// The current display order.
    #[must_use]
    pub const fn display(&self) -> &Hand {
        &self.display
    }

    /// Current interpolated position of every card, in deal order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.tweens.iter().map(Tween::position).collect()
    }

    /// Target position of every card, in deal order.
    #[must_use]
    pub fn targets(&self) -> Vec<Point> {
        self.tweens.iter().map(Tween::target).collect()
    }

    /// Returns whether every card has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tweens.iter().all(Tween::is_finished)
    }

    /// Shuffles the display order and animates every card to its new cell.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.display = self.display.shuffled(rng);
        self.apply(ViewEvent::Shuffle);
    }

    /// Sorts the display order and animates every card to its new cell.
    pub fn sort(&mut self) {
        self.display = self.display.sorted();
        self.apply(ViewEvent::Sort);
    }

    /// Advances animations and the idle timer by `dt_ms` milliseconds.
    ///
    /// Returns `true` if the idle timeout fired and the scene auto-sorted.
    /// The timeout is one-shot and is cancelled by any earlier interaction.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        for tween in &mut self.tweens {
            tween.advance(dt_ms);
        }
        if self.interacted {
            return false;
        }
        self.idle_ms = self.idle_ms.saturating_add(dt_ms);
        if self.idle_ms >= IDLE_SORT_DELAY_MS {
            self.display = self.display.sorted();
            self.apply(ViewEvent::IdleTimeout);
            return true;
        }
        false
    }

    /// Transitions the state machine and retargets every tween.
    fn apply(&mut self, event: ViewEvent) {
        self.state = self.state.next(event);
        self.interacted = true;
        self.retarget();
    }

    /// Points every card's tween at its cell in the display order, keeping
    /// its current position as the start of the motion.
    fn retarget(&mut self) {
        for (i, &card) in self.deck.iter().enumerate() {
            // The display order is a permutation of the deck, so every card
            // resolves; a duplicate collapses onto its first occurrence.
            if let Ok(coords) = self.display.coords_of(card) {
                let from = self.tweens[i].position();
                let to = layout::pixel_position(coords);
                let duration = BASE_ANIM_MS + i as u32 * ANIM_STAGGER_MS;
                self.tweens[i] = Tween::new(from, to, duration);
            }
        }
    }
}

/// Grid cell the centered layout stacks every card on: the middle column of
/// the middle row.
#[must_use]
pub const fn center_slot(len: usize) -> GridCoords {
    let rows = len.div_ceil(ROW_WIDTH);
    GridCoords::new(ROW_WIDTH / 2, rows / 2)
}
