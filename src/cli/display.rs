// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display helpers for the cvrank CLI.
//!
//! OneDark colours on dark terminals, One Light on light ones. `CVRANK_THEME`
//! ("dark" or "light") wins, then the `COLORFGBG` hint some terminals set, then
//! dark. Colour is dropped entirely under `NO_COLOR` or when stdout is not a TTY.

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(name: &str) -> Option<Theme> {
    match name.trim().to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is a light terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    std::env::var("CVRANK_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a theme colour plus modifiers, or leave it plain.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Characters on screen, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Cut plain text to `max_chars`, ending in `…` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    if use_colors() {
        format!("{}{}{}", GRAY(), s, RESET)
    } else {
        s.to_string()
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

fn labelled_rule(left: &str, label: &str, right: &str) {
    let label_part = format!(" {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part) + 1);
    println!(
        "{}{}{}",
        border(&format!("{}─", left)),
        label_part,
        border(&format!("{}{}", "─".repeat(remaining), right))
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule("┌", label, "┐");
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule("├", label, "┤");
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Seconds as milliseconds, one decimal: `0.4ms`.
pub fn millis(seconds: f64) -> String {
    format!("{:.1}ms", seconds * 1000.0)
}

/// Colour-coded duration (green=fast, yellow=medium, red=slow).
pub fn timing_ms(seconds: f64) -> String {
    let ms = seconds * 1000.0;
    let color = if ms < 5.0 {
        GREEN
    } else if ms < 50.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &millis(seconds))
}

/// Relevance score, two decimals, brighter for stronger matches.
pub fn score_value(score: f64) -> String {
    let color = if score >= 10.0 {
        BRIGHT_GREEN
    } else if score >= 5.0 {
        GREEN
    } else if score >= 2.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[BOLD], &format!("{:>6.2}", score))
}

/// `python×2` for exact evidence.
pub fn exact_badge(keyword: &str, count: usize) -> String {
    themed(GREEN, &[], &format!("{}×{}", keyword, count))
}

/// `javascript~javascrpt(0.90)` for fuzzy evidence.
pub fn fuzzy_badge(keyword: &str, word: &str, similarity: f64) -> String {
    themed(YELLOW, &[], &format!("{}~{}({:.2})", keyword, word, similarity))
}

pub fn verdict(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "yes")
    } else {
        themed(RED, &[BOLD], "NO")
    }
}
