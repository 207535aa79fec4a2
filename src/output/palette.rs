//! Color palettes for prideful output
//!
//! Two fixed palettes exist: the six basic ANSI foreground colors, and a
//! 42-entry gradient that walks red, green, and blue around a circle
//! separated by equal thirds inside the 256-color cube.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Start of an escape sequence
pub const ESC: &str = "\x1b[";

/// Reset all attributes
pub const NND: &str = "\x1b[0m";

/// Basic ANSI foreground colors, red through cyan
const BASIC_COLORS: [u8; 6] = [31, 32, 33, 34, 35, 36];

/// Gradient steps per radian
const GRADIENT_STEPS: usize = 6;

/// Gradient length (6 steps across 7 radians)
const GRADIENT_LEN: usize = GRADIENT_STEPS * 7;

const PI_3: f64 = PI / 3.0;

/// Which palette a [`Palette`] was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// 16-color ANSI codes 31..=36
    Basic,
    /// 256-color gradient
    Gradient,
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteKind::Basic => write!(f, "basic"),
            PaletteKind::Gradient => write!(f, "gradient"),
        }
    }
}

/// Palette requested by the user (CLI flag, env var, or config file)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteChoice {
    /// Pick from the terminal type (default)
    #[default]
    Auto,
    /// Always use the basic palette
    Basic,
    /// Always use the gradient palette
    Gradient,
}

impl PaletteChoice {
    /// Parse a choice from free text (used for `PRIDE_PALETTE`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(PaletteChoice::Auto),
            "basic" => Some(PaletteChoice::Basic),
            "gradient" => Some(PaletteChoice::Gradient),
            _ => None,
        }
    }

    /// Resolve to a concrete palette, consulting `term` only for `Auto`
    pub fn resolve(self, term: Option<&str>) -> Palette {
        match self {
            PaletteChoice::Auto => Palette::for_term(term),
            PaletteChoice::Basic => Palette::basic(),
            PaletteChoice::Gradient => Palette::gradient(),
        }
    }
}

/// Whether a `TERM` value can show the 256-color gradient
///
/// Matches `xterm*` and `*-256color`. Anything else, including an empty
/// value, falls back to the basic palette.
pub fn supports_gradient(term: &str) -> bool {
    term.starts_with("xterm") || term.ends_with("-256color")
}

/// An immutable, ordered list of color codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    colors: Vec<u8>,
}

impl Palette {
    /// The six basic ANSI foreground colors
    pub fn basic() -> Self {
        Self {
            kind: PaletteKind::Basic,
            colors: BASIC_COLORS.to_vec(),
        }
    }

    /// The 42-entry 256-color gradient
    pub fn gradient() -> Self {
        Self {
            kind: PaletteKind::Gradient,
            colors: gradient_table(),
        }
    }

    /// Select a palette from a terminal type
    pub fn for_term(term: Option<&str>) -> Self {
        match term {
            Some(term) if supports_gradient(term) => Self::gradient(),
            _ => Self::basic(),
        }
    }

    /// Select a palette from the `TERM` environment variable
    pub fn from_env() -> Self {
        let term = std::env::var("TERM").ok();
        let palette = Self::for_term(term.as_deref());
        log::debug!(
            "TERM={} selects the {} palette",
            term.as_deref().unwrap_or("<unset>"),
            palette.kind
        );
        palette
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color code for a cursor position; any cursor value is valid
    pub fn color_at(&self, cursor: usize) -> u8 {
        self.colors[cursor % self.colors.len()]
    }

    /// Wrap `text` in the escape sequence for the color at `cursor`
    pub fn paint(&self, cursor: usize, text: &str) -> String {
        let code = self.color_at(cursor);
        match self.kind {
            PaletteKind::Basic => format!("{}{}m{}{}", ESC, code, text, NND),
            PaletteKind::Gradient => format!("{}38;5;{}m{}{}", ESC, code, text, NND),
        }
    }
}

/// Build the gradient table
///
/// Each channel is `3 * sin(x + offset) + 3` truncated, giving values 0..=5
/// that are packed as base-6 digits into the color cube, which starts at 16.
fn gradient_table() -> Vec<u8> {
    (0..GRADIENT_LEN)
        .map(|n| {
            let x = n as f64 / GRADIENT_STEPS as f64;
            let r = (3.0 * x.sin() + 3.0) as u32;
            let g = (3.0 * (x + 2.0 * PI_3).sin() + 3.0) as u32;
            let b = (3.0 * (x + 4.0 * PI_3).sin() + 3.0) as u32;

            (36 * r + 6 * g + b + 16) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_palette() {
        let palette = Palette::basic();
        assert_eq!(palette.kind(), PaletteKind::Basic);
        assert_eq!(palette.colors(), &[31, 32, 33, 34, 35, 36]);
    }

    #[test]
    fn test_gradient_has_42_entries() {
        let palette = Palette::gradient();
        assert_eq!(palette.kind(), PaletteKind::Gradient);
        assert_eq!(palette.len(), 42);
    }

    #[test]
    fn test_gradient_known_entries() {
        let colors = Palette::gradient().colors().to_vec();
        // n=0: r=3, g=trunc(3*sin(2pi/3)+3)=5, b=trunc(3*sin(4pi/3)+3)=0
        assert_eq!(colors[0], 36 * 3 + 6 * 5 + 16);
        assert_eq!(colors[0], 154);
        // n=6: r=5, g=3, b=0
        assert_eq!(colors[6], 214);
        assert_eq!(colors[41], 184);
    }

    #[test]
    fn test_gradient_stays_in_color_cube() {
        for code in Palette::gradient().colors() {
            assert!((16..=231).contains(code), "code {} outside cube", code);
        }
    }

    #[test]
    fn test_color_at_wraps() {
        let palette = Palette::basic();
        for k in 0..100 {
            assert_eq!(palette.color_at(k), palette.colors()[k % 6]);
        }
        assert_eq!(palette.color_at(usize::MAX), palette.colors()[usize::MAX % 6]);

        let gradient = Palette::gradient();
        assert_eq!(gradient.color_at(42), gradient.color_at(0));
        assert_eq!(gradient.color_at(85), gradient.color_at(1));
    }

    #[test]
    fn test_paint_basic() {
        assert_eq!(Palette::basic().paint(0, "*"), "\x1b[31m*\x1b[0m");
        assert_eq!(Palette::basic().paint(7, "x"), "\x1b[32mx\x1b[0m");
    }

    #[test]
    fn test_paint_gradient() {
        assert_eq!(Palette::gradient().paint(0, "*"), "\x1b[38;5;154m*\x1b[0m");
    }

    #[test]
    fn test_for_term() {
        assert_eq!(
            Palette::for_term(Some("xterm-256color")).kind(),
            PaletteKind::Gradient
        );
        assert_eq!(Palette::for_term(Some("xterm")).kind(), PaletteKind::Gradient);
        assert_eq!(
            Palette::for_term(Some("screen-256color")).kind(),
            PaletteKind::Gradient
        );
        assert_eq!(Palette::for_term(Some("vt100")).kind(), PaletteKind::Basic);
        assert_eq!(Palette::for_term(Some("")).kind(), PaletteKind::Basic);
        assert_eq!(Palette::for_term(None).kind(), PaletteKind::Basic);
    }

    #[test]
    fn test_supports_gradient_is_anchored() {
        assert!(!supports_gradient("notxterm"));
        assert!(!supports_gradient("screen-256color-bce"));
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(PaletteChoice::parse("Gradient"), Some(PaletteChoice::Gradient));
        assert_eq!(PaletteChoice::parse(" basic "), Some(PaletteChoice::Basic));
        assert_eq!(PaletteChoice::parse("auto"), Some(PaletteChoice::Auto));
        assert_eq!(PaletteChoice::parse("rainbow"), None);
    }

    #[test]
    fn test_choice_resolve() {
        assert_eq!(
            PaletteChoice::Basic.resolve(Some("xterm-256color")).kind(),
            PaletteKind::Basic
        );
        assert_eq!(
            PaletteChoice::Gradient.resolve(Some("vt100")).kind(),
            PaletteKind::Gradient
        );
        assert_eq!(
            PaletteChoice::Auto.resolve(Some("xterm")).kind(),
            PaletteKind::Gradient
        );
    }
}
