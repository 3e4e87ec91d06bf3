// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line handling.
//!
//! `--about` is the only recognized flag; anything else is ignored so that
//! launchers passing extra arguments still start the magnifier.

/// Options collected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Open the about dialog on startup
    pub show_about: bool,
}

impl CliOptions {
    /// Parse the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--about" => options.show_about = true,
                other => log::debug!("Ignoring argument {:?}", other),
            }
        }
        options
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }
}
