//! Position interpolation for card movement.

use crate::layout::Point;

/// Overshoot constant for the back easing family.
const BACK_OVERSHOOT: f32 = 1.70158;

/// In-out-back easing: eases in and out with a slight overshoot past each
/// endpoint before settling. Input is clamped to `[0, 1]`; `f(0) = 0` and
/// `f(1) = 1`.
#[must_use]
pub fn ease_in_out_back(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let c = BACK_OVERSHOOT * 1.525;
    if t < 0.5 {
        let u = 2.0 * t;
        (u * u * ((c + 1.0) * u - c)) / 2.0
    } else {
        let u = 2.0 * t - 2.0;
        (u * u * ((c + 1.0) * u + c) + 2.0) / 2.0
    }
}

/// An in-flight movement of one card between two pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start position.
    from: Point,
    /// Target position.
    to: Point,
    /// Total duration in milliseconds.
    duration_ms: u32,
    /// Elapsed time in milliseconds, capped at the duration.
    elapsed_ms: u32,
}

impl Tween {
    /// Creates a tween from `from` to `to` over `duration_ms`.
    #[must_use]
    pub const fn new(from: Point, to: Point, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Creates an already-finished tween resting at `at`.
    #[must_use]
    pub const fn settled(at: Point) -> Self {
        Self {
            from: at,
            to: at,
            duration_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Advances the tween by `dt_ms` milliseconds.
    pub const fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms > self.duration_ms {
            self.elapsed_ms = self.duration_ms;
        }
    }

    /// Returns whether the tween has reached its target.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// The target position.
    #[must_use]
    pub const fn target(&self) -> Point {
        self.to
    }

    /// Current eased position between start and target.
    #[must_use]
    pub fn position(&self) -> Point {
        if self.duration_ms == 0 {
            return self.to;
        }
        let t = self.elapsed_ms as f32 / self.duration_ms as f32;
        let k = ease_in_out_back(t);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * k,
            self.from.y + (self.to.y - self.from.y) * k,
        )
    }
}
