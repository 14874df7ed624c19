//! View states and the events that move between them.

/// Layout state of the card scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Every card stacked on the center slot (initial state).
    Centered,
    /// Cards laid out in suit-major sorted order.
    Sorted,
    /// Cards laid out in the latest shuffled order.
    Shuffled,
}

/// Events that drive view-state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Shuffle requested.
    Shuffle,
    /// Sort requested.
    Sort,
    /// The idle delay elapsed with no interaction.
    IdleTimeout,
}

impl ViewState {
    /// State after handling `event`. Every event is accepted from every
    /// state; the idle timeout lands on the sorted layout.
    #[must_use]
    pub const fn next(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::Shuffle => Self::Shuffled,
            ViewEvent::Sort | ViewEvent::IdleTimeout => Self::Sorted,
        }
    }
}
