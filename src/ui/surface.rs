// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/surface.rs
//
// Rendering seam between the focal geometry and whatever draws it.

use crate::app::view::focal::PreviewLayout;
use crate::domain::focal::Point;

/// Host rendering layer driven by the focal geometry.
///
/// The geometry never reads ambient state: the image size comes from
/// [`Surface::measure`] once at construction, and every visual change is
/// pushed through the remaining methods.
pub trait Surface {
    /// Rendered `(width, height)` of the image in pixels.
    fn measure(&self) -> (f64, f64);

    /// Called once when the picker has been built and positioned.
    fn set_loaded(&mut self) {}

    /// Draw the marker at `point`.
    fn render_marker(&mut self, point: Point);

    /// Draw the preview and its masking bands, or hide them on `None`.
    fn render_preview(&mut self, layout: Option<&PreviewLayout>);

    /// Toggle the dragging style.
    fn set_dragging(&mut self, dragging: bool);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn measure(&self) -> (f64, f64) {
        (**self).measure()
    }

    fn set_loaded(&mut self) {
        (**self).set_loaded();
    }

    fn render_marker(&mut self, point: Point) {
        (**self).render_marker(point);
    }

    fn render_preview(&mut self, layout: Option<&PreviewLayout>) {
        (**self).render_preview(layout);
    }

    fn set_dragging(&mut self, dragging: bool) {
        (**self).set_dragging(dragging);
    }
}
