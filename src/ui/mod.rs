// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Magnus window.

pub mod about;
pub mod header;
pub mod viewer;
