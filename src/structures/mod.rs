// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Basic geometric structures used by the rendering orchestration.

pub mod cell;
pub mod color;
pub mod vector3d;
