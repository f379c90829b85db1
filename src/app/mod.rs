// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Focal picker application layer: model, notifications, view state and
// scripted input.

pub mod message;
pub mod model;
pub mod script;
pub mod view;

pub use message::{FocalEvent, SubscriptionId};
pub use model::{FocalGeometry, FocalOptions};
