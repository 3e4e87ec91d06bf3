// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model shared by the capture loop, the window and the settings file.

pub mod region;
pub mod settings;
pub mod state;
