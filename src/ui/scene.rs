// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/scene.rs
//
// In-memory surface: keeps the last rendered state of the picker.

use std::fmt;

use crate::app::view::focal::{Orientation, PreviewLayout};
use crate::domain::focal::{Point, Rect};
use crate::ui::surface::Surface;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    width: f64,
    height: f64,
    pub marker: Option<Point>,
    pub preview: Option<PreviewLayout>,
    pub dragging: bool,
    pub loaded: bool,
    /// Number of marker and preview draws since creation.
    pub redraws: u64,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }
}

impl Surface for Scene {
    fn measure(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_loaded(&mut self) {
        self.loaded = true;
    }

    fn render_marker(&mut self, point: Point) {
        self.marker = Some(point);
        self.redraws += 1;
    }

    fn render_preview(&mut self, layout: Option<&PreviewLayout>) {
        self.preview = layout.copied();
        self.redraws += 1;
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, label: &str, r: &Rect) -> fmt::Result {
    writeln!(
        f,
        "{label:<9} x={} y={} w={} h={}",
        r.x, r.y, r.width, r.height
    )
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "image     {}x{}", self.width, self.height)?;
        match self.marker {
            Some(p) => writeln!(f, "marker    x={} y={}", p.x, p.y)?,
            None => writeln!(f, "marker    -")?,
        }
        match &self.preview {
            Some(layout) => {
                let orientation = match layout.orientation {
                    Orientation::Landscape => "landscape",
                    Orientation::Portrait => "portrait",
                };
                write_rect(f, "preview", &layout.rect)?;
                writeln!(f, "{:<9} {orientation}", "format")?;
                write_rect(f, "overlay1", &layout.leading)?;
                write_rect(f, "overlay2", &layout.trailing)?;
            }
            None => writeln!(f, "preview   -")?,
        }
        write!(f, "dragging  {}", self.dragging)
    }
}
