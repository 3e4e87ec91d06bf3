// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small helpers with no UI or platform dependencies.

pub mod debounce;
pub mod geometry;
