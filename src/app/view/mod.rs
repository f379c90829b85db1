// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View-level state derived from the model.

pub mod focal;
