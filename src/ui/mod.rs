// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Rendering surfaces.

pub mod scene;
pub mod surface;

// Re-exports for convenience
pub use scene::Scene;
pub use surface::Surface;
