// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use anstyle::{AnsiColor, Effects, Style};

const LABEL: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const SEPARATOR: Style = Style::new().effects(Effects::BOLD);

/// Prints a failed run's error to stderr.
pub fn print_error(err: impl Display) {
    eprintln!("{LABEL}error{LABEL:#}{SEPARATOR}:{SEPARATOR:#} {err}");
}
