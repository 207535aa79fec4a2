//! Stream filter
//!
//! Feeds arbitrary test runner output through an [`OutputSink`]. Lines made
//! only of progress tokens are emitted token by token as soon as they are
//! read, so progress stays live; every other line is buffered until its
//! newline and sent through the line-print path.

use super::OutputSink;
use std::io::{self, BufRead};

/// Progress tokens: pass, failure, error, skip
const PROGRESS_TOKENS: &[u8] = b".EFS";

fn is_progress_token(byte: u8) -> bool {
    PROGRESS_TOKENS.contains(&byte)
}

/// Line-splitting state for [`filter`]
#[derive(Debug, Default)]
pub struct LineFilter {
    /// Bytes of the current line that are not part of a progress run
    pending: Vec<u8>,
    /// Progress tokens seen at the start of the current line
    tokens: Vec<u8>,
    /// A `\r` was read and may be the first half of `\r\n`
    carriage_return: bool,
}

impl LineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a chunk of input
    ///
    /// Held progress tokens up to the last `.` are released at the end of the
    /// chunk so output keeps pace with the producer. A trailing `E`, `F`, or
    /// `S` stays held until the next byte shows whether it starts a word.
    pub fn feed<S: OutputSink + ?Sized>(
        &mut self,
        sink: &mut S,
        chunk: &[u8],
    ) -> io::Result<()> {
        for &byte in chunk {
            if self.carriage_return {
                self.carriage_return = false;
                if byte == b'\n' {
                    self.end_line(sink, true)?;
                    continue;
                }
                self.push_byte(b'\r');
            }
            match byte {
                b'\n' => self.end_line(sink, false)?,
                b'\r' => self.carriage_return = true,
                _ => self.push_byte(byte),
            }
        }
        self.release_passes(sink)?;
        sink.flush()
    }

    /// Flush whatever is left once the input is exhausted
    pub fn finish<S: OutputSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        if self.carriage_return {
            self.carriage_return = false;
            self.push_byte(b'\r');
        }
        self.release_tokens(sink)?;
        if !self.pending.is_empty() {
            let line = String::from_utf8_lossy(&self.pending).into_owned();
            self.pending.clear();
            sink.print_line(&[line])?;
        }
        sink.flush()
    }

    fn push_byte(&mut self, byte: u8) {
        if self.pending.is_empty() && is_progress_token(byte) {
            self.tokens.push(byte);
            return;
        }
        if self.pending.is_empty() && !self.tokens.is_empty() {
            // A word such as "Finished" or "Error" starting with a token
            // letter: the held tokens were text after all.
            self.pending.append(&mut self.tokens);
        }
        self.pending.push(byte);
    }

    /// Release held tokens through the last `.`
    fn release_passes<S: OutputSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        if !self.pending.is_empty() {
            return Ok(());
        }
        let settled = match self.tokens.iter().rposition(|&b| b == b'.') {
            Some(last_pass) => last_pass + 1,
            None => return Ok(()),
        };
        for byte in self.tokens.drain(..settled) {
            sink.print_token(&char::from(byte).to_string())?;
        }
        Ok(())
    }

    fn release_tokens<S: OutputSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        if !self.pending.is_empty() {
            return Ok(());
        }
        for byte in self.tokens.drain(..) {
            sink.print_token(&char::from(byte).to_string())?;
        }
        Ok(())
    }

    fn end_line<S: OutputSink + ?Sized>(&mut self, sink: &mut S, crlf: bool) -> io::Result<()> {
        if self.pending.is_empty() {
            let had_tokens = !self.tokens.is_empty();
            self.release_tokens(sink)?;
            return match (had_tokens, crlf) {
                (true, true) => sink.print_token("\r\n"),
                (true, false) => sink.print_token("\n"),
                (false, true) => sink.print_line(&["\r".to_string()]),
                (false, false) => sink.print_line(&[]),
            };
        }
        if crlf {
            self.pending.push(b'\r');
        }
        let line = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        sink.print_line(&[line])
    }
}

/// Copy `reader` into `sink`, colorizing as it goes
pub fn filter<R, S>(mut reader: R, sink: &mut S) -> io::Result<()>
where
    R: BufRead,
    S: OutputSink + ?Sized,
{
    let mut state = LineFilter::new();
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        state.feed(sink, chunk)?;
        reader.consume(len);
    }
    state.finish(sink)
}
