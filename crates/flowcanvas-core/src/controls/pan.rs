//! Background-drag panning.
//!
//! Panning has no camera: every component position is translated by the
//! frame-to-frame change of a running offset, so the stored positions are
//! always what gets rendered.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use tracing::debug;

use crate::models::Position;

/// Accumulated pan translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    x: f64,
    y: f64,
}

impl PanOffset {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn add_delta(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise `self - previous`
    #[must_use]
    pub fn delta_from(self, previous: Self) -> (f64, f64) {
        (self.x - previous.x, self.y - previous.y)
    }
}

/// Pan gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    #[default]
    Idle,
    Panning {
        origin_pointer: Position,
        origin_offset: PanOffset,
    },
}

/// Offset implied by the pointer having moved to `pointer`
#[must_use]
pub fn offset_at(state: PanState, pointer: Position) -> Option<PanOffset> {
    match state {
        PanState::Idle => None,
        PanState::Panning {
            origin_pointer,
            origin_offset,
        } => {
            let (dx, dy) = pointer.delta_from(origin_pointer);
            Some(origin_offset.add_delta(dx, dy))
        }
    }
}

/// Pan gesture plus the running offset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanController {
    state: PanState,
    offset: PanOffset,
}

impl PanController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PanState::Idle,
            offset: PanOffset::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn state(&self) -> PanState {
        self.state
    }

    #[must_use]
    pub const fn offset(&self) -> PanOffset {
        self.offset
    }

    #[must_use]
    pub const fn is_panning(&self) -> bool {
        matches!(self.state, PanState::Panning { .. })
    }

    /// Starts a pan at `pointer` (canvas-local)
    pub fn begin(&mut self, pointer: Position) {
        debug!(x = pointer.x, y = pointer.y, "Pan started");
        self.state = PanState::Panning {
            origin_pointer: pointer,
            origin_offset: self.offset,
        };
    }

    /// Advances the pan and returns the delta to apply to every component.
    ///
    /// `None` when no pan is active.
    pub fn move_to(&mut self, pointer: Position) -> Option<(f64, f64)> {
        let next = offset_at(self.state, pointer)?;
        let delta = next.delta_from(self.offset);
        self.offset = next;
        Some(delta)
    }

    /// Ends the pan; returns `true` if one was active
    pub fn end(&mut self) -> bool {
        let was_panning = self.is_panning();
        if was_panning {
            debug!(x = self.offset.x, y = self.offset.y, "Pan ended");
        }
        self.state = PanState::Idle;
        was_panning
    }
}
