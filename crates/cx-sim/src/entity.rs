//! Read-only view of the simulation for renderers and output writers.
//!
//! Renderers switch on [`Entity`] rather than inspecting concrete types.
//! [`Portrayal`] carries the drawing hints of the classic grid canvas: a red
//! circle per vehicle and a square signal that is green while vertical
//! traffic flows and red otherwise.

use cx_core::{Cell, Direction, VehicleId};

use crate::Phase;

/// Discriminant of [`Entity`], handy for CSV columns and filtering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Vehicle,
    Signal,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Signal  => "signal",
        }
    }
}

/// One positioned thing on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Entity {
    Vehicle {
        id:        VehicleId,
        cell:      Cell,
        direction: Direction,
    },
    Signal {
        cell:  Cell,
        phase: Phase,
    },
}

impl Entity {
    #[inline]
    pub fn cell(&self) -> Cell {
        match *self {
            Entity::Vehicle { cell, .. } | Entity::Signal { cell, .. } => cell,
        }
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Vehicle { .. } => EntityKind::Vehicle,
            Entity::Signal { .. }  => EntityKind::Signal,
        }
    }

    pub fn portrayal(&self) -> Portrayal {
        match self {
            Entity::Vehicle { .. } => Portrayal {
                shape:  Shape::Circle { radius: 0.5 },
                color:  Color::Red,
                filled: true,
                layer:  0,
            },
            Entity::Signal { phase, .. } => Portrayal {
                shape:  Shape::Rect { w: 0.5, h: 0.5 },
                color:  if phase.is_vertical_green() { Color::Green } else { Color::Red },
                filled: true,
                layer:  0,
            },
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Shape {
    /// Radius in cell units.
    Circle { radius: f32 },
    /// Width and height in cell units.
    Rect { w: f32, h: f32 },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red   => "red",
            Color::Green => "green",
        }
    }
}

/// How a renderer should draw an entity in its cell.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Portrayal {
    pub shape:  Shape,
    pub color:  Color,
    pub filled: bool,
    pub layer:  u8,
}
