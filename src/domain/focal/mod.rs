// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/focal/mod.rs
//
// Focal point domain: geometry types and errors. No UI concerns.

pub mod error;
pub mod geometry;

pub use error::FocalError;
pub use geometry::{Bounds, FocusCoords, Point, PreviewSize, Rect};
