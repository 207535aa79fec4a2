//! Prideful output
//!
//! Wraps a writer and colorizes test progress: passes become rainbow stars,
//! failures and errors get a red background, and the "Finished tests" banner
//! becomes a rainbow "Fabulous tests".

use super::palette::{Palette, ESC, NND};
use super::{write_lines, OutputSink};
use std::io::{self, Write};

const FINISHED: &str = "Finished tests";
const FABULOUS: &str = "Fabulous tests";

/// Colorizing decorator around a writer
///
/// Owns the wrapped writer. Progress tokens and lines are rewritten; raw
/// writes through [`Write`] go to the writer untouched.
#[derive(Debug)]
pub struct PrideOutput<W: Write> {
    inner: W,
    palette: Palette,
    index: usize,
}

impl<W: Write> PrideOutput<W> {
    pub fn new(inner: W, palette: Palette) -> Self {
        Self {
            inner,
            palette,
            index: 0,
        }
    }

    /// Wrap `inner` with the palette selected from `TERM`
    pub fn from_env(inner: W) -> Self {
        Self::new(inner, Palette::from_env())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current cursor into the palette
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Color `text` with the next palette entry
    ///
    /// A lone `.` is drawn as `*`.
    pub fn pride(&mut self, text: &str) -> String {
        let text = if text == "." { "*" } else { text };
        let painted = self.palette.paint(self.index, text);
        self.index = self.index.wrapping_add(1);
        painted
    }

    /// Rewrite one line-print argument
    fn fabulize(&mut self, arg: &str) -> String {
        match arg.find(FINISHED) {
            Some(start) => {
                self.index = 0;
                let rainbow: String = FABULOUS
                    .chars()
                    .map(|c| self.pride(&c.to_string()))
                    .collect();
                format!(
                    "{}{}{}",
                    &arg[..start],
                    rainbow,
                    &arg[start + FINISHED.len()..]
                )
            }
            None => arg.to_string(),
        }
    }
}

impl<W: Write> OutputSink for PrideOutput<W> {
    fn print_token(&mut self, token: &str) -> io::Result<()> {
        match token {
            "." => {
                let star = self.pride(token);
                self.inner.write_all(star.as_bytes())
            }
            "E" | "F" => write!(self.inner, "{}41m{}37m{}{}", ESC, ESC, token, NND),
            _ => self.inner.write_all(token.as_bytes()),
        }
    }

    fn print_line(&mut self, args: &[String]) -> io::Result<()> {
        let args: Vec<String> = args.iter().map(|arg| self.fabulize(arg)).collect();
        write_lines(&mut self.inner, &args)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Write for PrideOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> PrideOutput<Vec<u8>> {
        PrideOutput::new(Vec::new(), Palette::basic())
    }

    fn output(pride: PrideOutput<Vec<u8>>) -> String {
        String::from_utf8(pride.into_inner()).unwrap()
    }

    #[test]
    fn test_dot_becomes_colored_star() {
        let mut out = basic();
        out.print_token(".").unwrap();
        assert_eq!(out.index(), 1);
        assert_eq!(output(out), "\x1b[31m*\x1b[0m");
    }

    #[test]
    fn test_dots_cycle_basic_colors() {
        let mut out = basic();
        for _ in 0..12 {
            out.print_token(".").unwrap();
        }
        let expected: String = [31, 32, 33, 34, 35, 36, 31, 32, 33, 34, 35, 36]
            .iter()
            .map(|c| format!("\x1b[{}m*\x1b[0m", c))
            .collect();
        assert_eq!(output(out), expected);
    }

    #[test]
    fn test_gradient_dot() {
        let mut out = PrideOutput::new(Vec::new(), Palette::gradient());
        out.print_token(".").unwrap();
        out.print_token(".").unwrap();
        assert_eq!(
            output(out),
            "\x1b[38;5;154m*\x1b[0m\x1b[38;5;154m*\x1b[0m"
        );
    }

    #[test]
    fn test_failures_use_fixed_escape() {
        let mut out = basic();
        out.print_token(".").unwrap();
        out.print_token("F").unwrap();
        out.print_token("E").unwrap();
        assert_eq!(out.index(), 1);
        assert_eq!(
            output(out),
            "\x1b[31m*\x1b[0m\x1b[41m\x1b[37mF\x1b[0m\x1b[41m\x1b[37mE\x1b[0m"
        );
    }

    #[test]
    fn test_failure_escape_ignores_cursor() {
        let mut first = basic();
        first.print_token("F").unwrap();

        let mut later = basic();
        for _ in 0..5 {
            later.print_token(".").unwrap();
        }
        later.get_mut().clear();
        later.print_token("F").unwrap();

        assert_eq!(output(first), output(later));
    }

    #[test]
    fn test_other_tokens_pass_through() {
        let mut out = basic();
        out.print_token("S").unwrap();
        out.print_token("..").unwrap();
        out.print_token("\n").unwrap();
        assert_eq!(out.index(), 0);
        assert_eq!(output(out), "S..\n");
    }

    #[test]
    fn test_finished_tests_becomes_fabulous() {
        let mut out = basic();
        for _ in 0..4 {
            out.print_token(".").unwrap();
        }
        out.get_mut().clear();

        out.print_line(&["Finished tests in 0.004s, 1000.0 tests/s.".to_string()])
            .unwrap();
        assert_eq!(out.index(), 14);

        let rainbow: String = "Fabulous tests"
            .chars()
            .enumerate()
            .map(|(i, c)| format!("\x1b[{}m{}\x1b[0m", 31 + i % 6, c))
            .collect();
        assert_eq!(
            output(out),
            format!("{} in 0.004s, 1000.0 tests/s.\n", rainbow)
        );
    }

    #[test]
    fn test_only_first_marker_replaced() {
        let mut out = basic();
        out.print_line(&["Finished tests Finished tests".to_string()])
            .unwrap();
        let text = output(out);
        assert!(text.ends_with(" Finished tests\n"));
        assert!(!text.starts_with("Finished"));
    }

    #[test]
    fn test_lines_without_marker_unchanged() {
        let mut out = basic();
        out.print_token(".").unwrap();
        out.get_mut().clear();
        out.print_line(&["# Running tests:".to_string(), String::new()])
            .unwrap();
        assert_eq!(out.index(), 1);
        assert_eq!(output(out), "# Running tests:\n\n");
    }

    #[test]
    fn test_raw_writes_pass_through() {
        let mut out = basic();
        write!(out, "Finished tests .").unwrap();
        Write::flush(&mut out).unwrap();
        assert_eq!(out.index(), 0);
        assert_eq!(output(out), "Finished tests .");
    }

    #[test]
    fn test_pride_advances_cursor() {
        let mut out = basic();
        assert_eq!(out.pride("a"), "\x1b[31ma\x1b[0m");
        assert_eq!(out.pride("."), "\x1b[32m*\x1b[0m");
        assert_eq!(out.index(), 2);
    }

    #[test]
    fn test_sink_errors_propagate() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut out = PrideOutput::new(Broken, Palette::basic());
        let err = out.print_token(".").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
