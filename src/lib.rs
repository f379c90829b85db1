// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Focal point picker: drag a marker over an image, read the focus back in
// percent and preview how a crop of a given aspect ratio sits around it.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod ui;

pub use app::view::focal::{Orientation, PreviewLayout};
pub use app::{FocalEvent, FocalGeometry, FocalOptions, SubscriptionId};
pub use domain::focal::{Bounds, FocalError, FocusCoords, Point, PreviewSize, Rect};
pub use ui::{Scene, Surface};
