// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The two timers that drive the magnifier: the capture poll loop and the
//! window geometry debounce.

pub mod lifecycle;
pub mod poll;

pub use lifecycle::WindowLifecycle;
pub use poll::{Frame, PollLoop};
