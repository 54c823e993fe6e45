// src/log.rs
use std::io::{IsTerminal, Write};

use chrono::{Local, NaiveTime};

/// Env var that turns on `logd!` lines.
pub const DEBUG_ENV: &str = "CAGEMATCH_DEBUG";

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Level::Debug => "\x1b[90m",
            Level::Info => "\x1b[94m",
            Level::Success => "\x1b[92m",
            Level::Warning => "\x1b[93m",
            Level::Error => "\x1b[91m",
        }
    }
}

/// `[HH:MM:SS] TAG         | message`, tag padded to 11 columns.
/// Pure: no clock or terminal lookups happen here.
pub fn format_line(level: Level, msg: &str, at: NaiveTime, color: bool) -> String {
    let time = at.format("%H:%M:%S");
    let tag = format!("{:<11}", level.tag());
    if color {
        format!("[{time}] {}{tag}{RESET} | {msg}", level.ansi())
    } else {
        format!("[{time}] {tag} | {msg}")
    }
}

pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}

/// Internal logging function
pub fn write_log(level: Level, msg: &str) {
    if level == Level::Debug && !debug_enabled() {
        return;
    }
    let mut out = std::io::stdout().lock();
    let color = out.is_terminal();
    let line = format_line(level, msg, Local::now().time(), color);
    let _ = writeln!(out, "{line}");
}

/// Info-level logging
#[macro_export]
macro_rules! logi {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Success-level logging
#[macro_export]
macro_rules! logok {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Success, &format!($($arg)*))
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warning, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

/// Debug-level logging, silent unless `CAGEMATCH_DEBUG` is set
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}
