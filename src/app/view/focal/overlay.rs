// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/focal/overlay.rs
//
// Preview rectangle placement and the two masking bands around it.

use crate::domain::focal::{Bounds, Point, PreviewSize, Rect};

/// Which axis the fitted preview spans completely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Full width, letterboxed vertically.
    Landscape,
    /// Full height, letterboxed horizontally.
    Portrait,
}

/// Everything a surface needs to draw the crop preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub rect: Rect,
    pub orientation: Orientation,
    /// Band before the preview on the letterboxed axis (ends at its near edge).
    pub leading: Rect,
    /// Band after the preview on the letterboxed axis (starts at its far edge).
    pub trailing: Rect,
}

/// Center a preview of `size` on `focus` and push it back inside `bounds`.
pub fn layout_preview(bounds: &Bounds, size: PreviewSize, focus: Point) -> PreviewLayout {
    let (max_x, max_y) = (bounds.width(), bounds.height());
    let (width, height) = (size.width, size.height);

    let mut x = focus.x - width / 2.0;
    let mut y = focus.y - height / 2.0;

    if x < 0.0 {
        x = 0.0;
    }
    if x + width > max_x {
        x = max_x - width;
    }

    if y < 0.0 {
        y = 0.0;
    }
    if y + height > max_y {
        y = max_y - height;
    }

    let rect = Rect::new(x, y, width, height);

    // Bands are as large as the image; only their offset changes.
    if width == max_x {
        PreviewLayout {
            rect,
            orientation: Orientation::Landscape,
            leading: Rect::new(0.0, y - max_y, max_x, max_y),
            trailing: Rect::new(0.0, rect.bottom(), max_x, max_y),
        }
    } else {
        PreviewLayout {
            rect,
            orientation: Orientation::Portrait,
            leading: Rect::new(x - max_x, 0.0, max_x, max_y),
            trailing: Rect::new(rect.right(), 0.0, max_x, max_y),
        }
    }
}
