// SPDX-License-Identifier: MPL-2.0
//! Définitions de styles partagées entre les composants.

pub mod button;
pub mod container;
pub mod slider;
