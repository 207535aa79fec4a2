//! Test runner output sinks
//!
//! [`OutputSink`] is the small set of operations a test runner needs to
//! report progress. [`PlainOutput`] forwards them to any writer unchanged;
//! [`PrideOutput`] colorizes them first.

pub mod filter;
pub mod palette;
pub mod pride;

pub use palette::{Palette, PaletteChoice, PaletteKind};
pub use pride::PrideOutput;

use std::io::{self, Write};

/// Destination for test runner output
pub trait OutputSink {
    /// Print a single progress token (or any text) without a newline
    fn print_token(&mut self, token: &str) -> io::Result<()>;

    /// Print each argument on its own line; no arguments prints an empty line
    fn print_line(&mut self, args: &[String]) -> io::Result<()>;

    /// Flush anything buffered by the underlying writer
    fn flush(&mut self) -> io::Result<()>;
}

/// Write `args` the way a line-print operation does
pub(crate) fn write_lines<W: Write>(writer: &mut W, args: &[String]) -> io::Result<()> {
    if args.is_empty() {
        return writer.write_all(b"\n");
    }
    for arg in args {
        writer.write_all(arg.as_bytes())?;
        if !arg.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Undecorated output
#[derive(Debug)]
pub struct PlainOutput<W: Write> {
    inner: W,
}

impl<W: Write> PlainOutput<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for PlainOutput<W> {
    fn print_token(&mut self, token: &str) -> io::Result<()> {
        self.inner.write_all(token.as_bytes())
    }

    fn print_line(&mut self, args: &[String]) -> io::Result<()> {
        write_lines(&mut self.inner, args)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn print_token(&mut self, token: &str) -> io::Result<()> {
        (**self).print_token(token)
    }

    fn print_line(&mut self, args: &[String]) -> io::Result<()> {
        (**self).print_line(args)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn print_token(&mut self, token: &str) -> io::Result<()> {
        (**self).print_token(token)
    }

    fn print_line(&mut self, args: &[String]) -> io::Result<()> {
        (**self).print_line(args)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
