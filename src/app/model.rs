// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Focal picker state: committed focus, preview and the active drag.

use crate::app::message::{FocalEvent, Listeners, SubscriptionId};
use crate::app::view::focal::{DragState, PreviewLayout, layout_preview};
use crate::constant::{DEFAULT_FOCUS_X, DEFAULT_FOCUS_Y};
use crate::domain::focal::{Bounds, FocalError, FocusCoords, Point, PreviewSize};
use crate::ui::Surface;

// =============================================================================
// Options
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalOptions {
    /// Initial focus in percent. Values outside `[0, 100]` are accepted as-is.
    pub focus: FocusCoords,
}

impl Default for FocalOptions {
    fn default() -> Self {
        Self {
            focus: FocusCoords::new(DEFAULT_FOCUS_X, DEFAULT_FOCUS_Y),
        }
    }
}

// =============================================================================
// Model
// =============================================================================

/// Coordinate engine of the focal point picker.
///
/// Pointer input arrives through [`begin_drag`](Self::begin_drag),
/// [`update_drag`](Self::update_drag) and [`end_drag`](Self::end_drag); every
/// visual result is pushed to the surface `S`.
#[derive(Debug)]
pub struct FocalGeometry<S: Surface> {
    surface: S,
    bounds: Bounds,

    // Focus.
    point: Point,
    coords: FocusCoords,

    // Preview.
    preview: Option<PreviewSize>,
    layout: Option<PreviewLayout>,

    // Interaction.
    drag: DragState,
    listeners: Listeners,
}

impl<S: Surface> FocalGeometry<S> {
    /// Measure the surface once and place the marker at `options.focus`.
    pub fn new(mut surface: S, options: FocalOptions) -> Result<Self, FocalError> {
        let (width, height) = surface.measure();
        let bounds = Bounds::new(width, height)?;
        let point = bounds.point_from_coords(options.focus);

        surface.render_marker(point);
        surface.set_loaded();
        log::debug!(
            "Focal picker ready: {width}x{height}, focus {:?} -> {:?}",
            options.focus,
            point
        );

        Ok(Self {
            surface,
            bounds,
            point,
            coords: options.focus,
            preview: None,
            layout: None,
            drag: DragState::Idle,
            listeners: Listeners::default(),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Committed marker position in pixels.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Committed focus in percent.
    pub fn coords(&self) -> FocusCoords {
        self.coords
    }

    pub fn preview(&self) -> Option<PreviewSize> {
        self.preview
    }

    pub fn preview_layout(&self) -> Option<&PreviewLayout> {
        self.layout.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FocalEvent) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Dragging
    // -------------------------------------------------------------------------

    /// Start dragging the marker from its committed position.
    ///
    /// `pointer` is only used as the origin for later deltas.
    pub fn begin_drag(&mut self, pointer: Point) -> Result<(), FocalError> {
        if !self.drag.start(pointer, self.point) {
            log::warn!("Ignoring drag start at {pointer:?}: a drag is already in progress");
            return Err(FocalError::DragInProgress);
        }

        log::debug!("Drag start at {pointer:?} from {:?}", self.point);
        self.surface.set_dragging(true);
        self.listeners.emit(FocalEvent::DragStart);
        Ok(())
    }

    /// Move the marker with the pointer without committing it.
    ///
    /// Returns the displayed position, or `None` when no drag is active.
    pub fn update_drag(&mut self, pointer: Point) -> Option<Point> {
        let Some(session) = self.drag.session().copied() else {
            log::debug!("Ignoring drag update at {pointer:?}: not dragging");
            return None;
        };

        let point = session.position_for(pointer, &self.bounds);
        self.surface.render_marker(point);
        self.adjust_preview(point);
        self.listeners.emit(FocalEvent::Drag { point });
        Some(point)
    }

    /// Finish the drag and commit the marker position.
    ///
    /// Returns the new focus if it moved. A call without an active drag does
    /// nothing and returns `None`.
    pub fn end_drag(&mut self, pointer: Point) -> Option<FocusCoords> {
        let Some(session) = self.drag.finish() else {
            log::debug!("Ignoring drag end at {pointer:?}: not dragging");
            return None;
        };

        self.surface.set_dragging(false);
        self.listeners.emit(FocalEvent::DragEnd);

        let point = session.position_for(pointer, &self.bounds);
        self.surface.render_marker(point);
        self.adjust_preview(point);

        if point == self.point {
            log::debug!("Drag end at {pointer:?}: focus unchanged");
            return None;
        }

        self.point = point;
        self.coords = self.bounds.coords_from_point(point);
        log::debug!("Focus committed: {:?} ({:?})", self.coords, point);
        self.listeners.emit(FocalEvent::Change {
            x: self.coords.x,
            y: self.coords.y,
        });
        Some(self.coords)
    }

    // -------------------------------------------------------------------------
    // Preview
    // -------------------------------------------------------------------------

    /// Show a preview of a `width` x `height` crop, fitted into the bounds.
    ///
    /// Non-finite, zero or negative sizes clear the preview instead.
    pub fn set_preview(&mut self, width: f64, height: f64) {
        match self.bounds.fit_preview(width, height) {
            Some(size) => {
                log::debug!("Preview {width}x{height} fitted to {}x{}", size.width, size.height);
                self.preview = Some(size);
                self.adjust_preview(self.point);
            }
            None => {
                log::debug!("Preview {width}x{height} is not a valid size, clearing");
                self.clear_preview();
            }
        }
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
        self.layout = None;
        self.surface.render_preview(None);
    }

    fn adjust_preview(&mut self, focus: Point) {
        let Some(size) = self.preview else {
            return;
        };
        let layout = layout_preview(&self.bounds, size, focus);
        self.surface.render_preview(Some(&layout));
        self.layout = Some(layout);
    }
}
