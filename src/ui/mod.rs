// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`list`] - Sidebar list of catalog entries
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod list;
pub mod styles;
