// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/focal/mod.rs
//
// Focal picker view state: marker drag state and preview layout.

mod drag;
mod overlay;

pub use drag::{DragSession, DragState};
pub use overlay::{Orientation, PreviewLayout, layout_preview};
