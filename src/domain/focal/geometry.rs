// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/focal/geometry.rs
//
// Focal geometry domain model: bounds, points, percent coordinates and
// preview rectangles.

use crate::constant::PERCENT_SCALE;
use crate::domain::focal::error::FocalError;

/// A position in pixel space, relative to the image's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Focus position in percent of the image size, `[0, 100]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusCoords {
    pub x: f64,
    pub y: f64,
}

impl FocusCoords {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Effective preview viewport size after fitting to the bounds.
///
/// Both dimensions are whole pixels. An extreme aspect ratio can round one
/// of them down to zero; such a preview is still laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSize {
    pub width: f64,
    pub height: f64,
}

impl PreviewSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rendered size of the image the focus is picked on, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Create bounds from a measured size.
    ///
    /// Both sides are rounded to whole pixels so that clamped and rounded
    /// positions can never leave the bounds. Sizes that are non-finite or
    /// round to zero or less are rejected.
    pub fn new(width: f64, height: f64) -> Result<Self, FocalError> {
        let (w, h) = (round_half_up(width), round_half_up(height));
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(w) || !valid(h) {
            return Err(FocalError::InvalidBounds { width, height });
        }
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel position for percent coordinates, rounded per axis.
    ///
    /// Coordinates outside `[0, 100]` are not rejected and yield a point
    /// outside the bounds.
    pub fn point_from_coords(&self, coords: FocusCoords) -> Point {
        Point::new(
            round_half_up(coords.x * (self.width / PERCENT_SCALE)),
            round_half_up(coords.y * (self.height / PERCENT_SCALE)),
        )
    }

    /// Percent coordinates for a pixel position. Not rounded.
    pub fn coords_from_point(&self, point: Point) -> FocusCoords {
        FocusCoords::new(
            (PERCENT_SCALE / self.width) * point.x,
            (PERCENT_SCALE / self.height) * point.y,
        )
    }

    /// Clamp each axis into `[0, bound]` and round to whole pixels.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            round_half_up(clamp(point.x, 0.0, self.width)),
            round_half_up(clamp(point.y, 0.0, self.height)),
        )
    }

    /// Fit a requested preview size into the bounds, keeping its aspect ratio.
    ///
    /// Inputs are truncated to integers first; non-finite, zero or negative
    /// sizes yield `None`. The three corrections run once each, in order, and
    /// a later one is never re-checked against an earlier one.
    pub fn fit_preview(&self, width: f64, height: f64) -> Option<PreviewSize> {
        let mut width = width.trunc();
        let mut height = height.trunc();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }

        if width < self.width && height < self.height {
            let ratio = self.width / width;
            width *= ratio;
            height *= ratio;
        }
        if width > self.width {
            let ratio = self.width / width;
            width *= ratio;
            height *= ratio;
        }
        if height > self.height {
            let ratio = self.height / height;
            width *= ratio;
            height *= ratio;
        }

        Some(PreviewSize::new(round_half_up(width), round_half_up(height)))
    }
}

/// `max(lo, min(hi, v))`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0).expect("valid bounds")
    }

    #[test]
    fn rejects_non_positive_bounds() {
        assert!(matches!(
            Bounds::new(0.0, 600.0),
            Err(FocalError::InvalidBounds { .. })
        ));
        assert!(Bounds::new(800.0, -1.0).is_err());
        assert!(Bounds::new(f64::NAN, 10.0).is_err());
        assert!(Bounds::new(f64::INFINITY, 10.0).is_err());
        assert_eq!(
            Bounds::new(0.3, 600.0),
            Err(FocalError::InvalidBounds {
                width: 0.3,
                height: 600.0
            })
        );
    }

    #[test]
    fn fractional_bounds_round_to_whole_pixels() {
        let b = Bounds::new(800.6, 599.5).expect("valid bounds");
        assert_eq!((b.width(), b.height()), (801.0, 600.0));

        let b = Bounds::new(800.4, 0.5).expect("valid bounds");
        assert_eq!((b.width(), b.height()), (800.0, 1.0));
    }

    #[test]
    fn clamp_point_never_exceeds_fractional_bounds() {
        let b = Bounds::new(800.6, 600.0).expect("valid bounds");
        let p = b.clamp_point(Point::new(5000.0, -5000.0));
        assert!(p.x <= b.width());
        assert_eq!(p, Point::new(801.0, 0.0));
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }

    #[test]
    fn point_from_coords_rounds_per_axis() {
        let b = bounds();
        assert_eq!(
            b.point_from_coords(FocusCoords::new(50.0, 50.0)),
            Point::new(400.0, 300.0)
        );
        assert_eq!(
            b.point_from_coords(FocusCoords::new(33.3, 10.1)),
            Point::new(266.0, 61.0)
        );
    }

    #[test]
    fn out_of_range_coords_are_not_clamped() {
        let p = bounds().point_from_coords(FocusCoords::new(150.0, -10.0));
        assert_eq!(p, Point::new(1200.0, -60.0));
    }

    #[test]
    fn coords_keep_fractions() {
        let c = bounds().coords_from_point(Point::new(266.0, 61.0));
        assert!((c.x - 33.25).abs() < 1e-9);
        assert!((c.y - 10.166_666_666).abs() < 1e-6);
    }

    #[test]
    fn clamp_point_stays_within_bounds() {
        let b = bounds();
        assert_eq!(b.clamp_point(Point::new(-50.0, 700.0)), Point::new(0.0, 600.0));
        assert_eq!(b.clamp_point(Point::new(10.4, 20.6)), Point::new(10.0, 21.0));
    }

    #[test]
    fn fit_square_scales_up_then_down_on_height() {
        let size = bounds().fit_preview(100.0, 100.0).expect("preview");
        assert_eq!(size, PreviewSize::new(600.0, 600.0));
    }

    #[test]
    fn fit_wide_preview_fills_width() {
        let size = bounds().fit_preview(16.0, 9.0).expect("preview");
        assert_eq!(size, PreviewSize::new(800.0, 450.0));
    }

    #[test]
    fn fit_oversized_width_scales_down() {
        let size = bounds().fit_preview(1600.0, 600.0).expect("preview");
        assert_eq!(size, PreviewSize::new(800.0, 300.0));
    }

    #[test]
    fn fit_tall_preview_fills_height() {
        let size = bounds().fit_preview(300.0, 900.0).expect("preview");
        assert_eq!(size, PreviewSize::new(200.0, 600.0));
    }

    #[test]
    fn fit_truncates_inputs() {
        let size = bounds().fit_preview(10.9, 5.2).expect("preview");
        assert_eq!(size, PreviewSize::new(800.0, 400.0));
    }

    #[test]
    fn fit_rejects_invalid_sizes() {
        let b = bounds();
        assert_eq!(b.fit_preview(0.0, 0.0), None);
        assert_eq!(b.fit_preview(f64::NAN, 5.0), None);
        assert_eq!(b.fit_preview(5.0, f64::INFINITY), None);
        assert_eq!(b.fit_preview(-5.0, 10.0), None);
        assert_eq!(b.fit_preview(0.5, 10.0), None);
    }

    #[test]
    fn fit_extreme_ratio_can_round_to_zero_width() {
        // 1x100000: height correction scales width to 0.006 px.
        let size = bounds().fit_preview(1.0, 100_000.0).expect("preview");
        assert_eq!(size, PreviewSize::new(0.0, 600.0));
    }

    #[test]
    fn fit_never_exceeds_bounds() {
        let b = Bounds::new(800.6, 450.2).expect("valid bounds");
        for (w, h) in [(16.0, 9.0), (1.0, 1.0), (4000.0, 3.0), (3.0, 4000.0), (801.0, 451.0)] {
            let size = b.fit_preview(w, h).expect("preview");
            assert!(size.width <= b.width(), "{w}x{h} -> {size:?}");
            assert!(size.height <= b.height(), "{w}x{h} -> {size:?}");
        }
    }
}
