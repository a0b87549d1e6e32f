//! Light/dark presentation choice.
//!
//! `auto` follows the local clock: dark from 18:00 until 06:00. The result is recomputed
//! on every draw, so an hour boundary is picked up by the next redraw without any timer.

use std::fmt;

use chrono::{Local, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// Cycle order: light → dark → auto → light
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Auto,
            ThemeMode::Auto => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀ Light",
            ThemeMode::Dark => "☾ Dark",
            ThemeMode::Auto => "◐ Auto",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// Night hours are [18, 24) ∪ [0, 6)
pub fn is_dark_hour(hour: u32) -> bool {
    !(6..18).contains(&hour)
}

/// Whether `mode` renders dark at time `now`
pub fn resolve<T: Timelike>(mode: ThemeMode, now: &T) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::Auto => is_dark_hour(now.hour()),
    }
}

pub fn resolve_now(mode: ThemeMode) -> bool {
    resolve(mode, &Local::now())
}
