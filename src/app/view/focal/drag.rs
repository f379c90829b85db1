// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/focal/drag.rs
//
// Marker drag state: idle or dragging with the anchor it started from.

use crate::domain::focal::{Bounds, Point};

/// Anchor of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag start, only used as delta origin.
    pub start_pointer: Point,
    /// Committed marker position at drag start.
    pub start_point: Point,
}

impl DragSession {
    pub fn new(start_pointer: Point, start_point: Point) -> Self {
        Self {
            start_pointer,
            start_point,
        }
    }

    /// Marker position for the given pointer: anchor plus pointer delta,
    /// clamped into `bounds` and rounded to whole pixels.
    pub fn position_for(&self, pointer: Point, bounds: &Bounds) -> Point {
        let (dx, dy) = pointer.delta_from(self.start_pointer);
        bounds.clamp_point(self.start_point.offset(dx, dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Idle -> Dragging. Returns `false` and leaves the active session
    /// untouched when already dragging.
    pub fn start(&mut self, pointer: Point, point: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::Dragging(DragSession::new(pointer, point));
        true
    }

    /// Dragging -> Idle, handing back the finished session.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}
