//! CLI color helpers.
//!
//! Respects `NO_COLOR`, `FORCE_COLOR`, and TTY detection through
//! `owo-colors`' `if_supports_color()`. `--no-color` sets an in-process flag
//! that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{self, Stderr, Stdout};

static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const ACCENT: Rgb = Rgb::from_hex(0x7CB4C8); // paths, URLs, fingerprints
const FRESH: Rgb = Rgb::from_hex(0x6B8F5E); // bound / unchanged
const STALE: Rgb = Rgb::from_hex(0xC49A5C); // skipped / drift
const FAILED: Rgb = Rgb::from_hex(0xB87060);
const MUTED: Rgb = Rgb::from_hex(0x5C6370);

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: Stream, color: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(color.r, color.g, color.b))
        .to_string()
}

pub fn accent(text: &str) -> String {
    paint(text, Stdout, ACCENT)
}

pub fn fresh(text: &str) -> String {
    paint(text, Stdout, FRESH)
}

pub fn stale(text: &str) -> String {
    paint(text, Stdout, STALE)
}

pub fn muted(text: &str) -> String {
    paint(text, Stdout, MUTED)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    paint(text, Stderr, FAILED)
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    paint(text, Stderr, STALE)
}

/// Hint styling for secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint(text, Stderr, MUTED)
}
