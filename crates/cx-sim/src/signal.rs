//! The two-phase traffic signal.

use std::fmt;

use cx_core::{Axis, Cell};

/// Which lane group currently has right of way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    #[default]
    VerticalGreen,
    HorizontalGreen,
}

impl Phase {
    /// `true` if vehicles travelling along `axis` may move in this phase.
    #[inline]
    pub fn permits(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Phase::VerticalGreen, Axis::Vertical) | (Phase::HorizontalGreen, Axis::Horizontal)
        )
    }

    #[inline]
    pub fn flipped(self) -> Phase {
        match self {
            Phase::VerticalGreen   => Phase::HorizontalGreen,
            Phase::HorizontalGreen => Phase::VerticalGreen,
        }
    }

    #[inline]
    pub fn is_vertical_green(self) -> bool {
        self == Phase::VerticalGreen
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::VerticalGreen   => "vertical_green",
            Phase::HorizontalGreen => "horizontal_green",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A passive phase holder standing at the grid centre.
///
/// The signal has no timing logic of its own; [`Sim`][crate::Sim] flips it
/// every `signal_period` ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrafficSignal {
    position: Cell,
    phase:    Phase,
}

impl TrafficSignal {
    /// A signal at `position`, starting vertical-green.
    pub fn new(position: Cell) -> Self {
        Self { position, phase: Phase::VerticalGreen }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_vertical_green(&self) -> bool {
        self.phase.is_vertical_green()
    }

    #[inline]
    pub fn permits(&self, axis: Axis) -> bool {
        self.phase.permits(axis)
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    pub(crate) fn toggle(&mut self) -> Phase {
        self.phase = self.phase.flipped();
        self.phase
    }
}
