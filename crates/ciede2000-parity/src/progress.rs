//! Coarse progress feedback
//!
//! Progress output is best effort: a closed or failing stream never
//! interrupts generation or comparison.

use std::io::Write;

/// Records between two progress ticks
pub const PROGRESS_INTERVAL: usize = 1000;

/// Receives the number of records processed so far
pub trait Progress {
    fn tick(&mut self, done: usize);

    fn finish(&mut self, _done: usize) {}
}

/// No feedback at all
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn tick(&mut self, _done: usize) {}
}

/// Prints one dot every `interval` records
#[derive(Debug)]
pub struct Dots<W: Write> {
    out: W,
    interval: usize,
    printed: bool,
}

impl Dots<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), PROGRESS_INTERVAL)
    }
}

impl<W: Write> Dots<W> {
    pub fn new(out: W, interval: usize) -> Self {
        Self {
            out,
            interval: interval.max(1),
            printed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for Dots<W> {
    fn tick(&mut self, done: usize) {
        if done % self.interval == 0 {
            tracing::debug!(records = done, "progress");
            let _ = write!(self.out, ".");
            let _ = self.out.flush();
            self.printed = true;
        }
    }

    fn finish(&mut self, _done: usize) {
        if self.printed {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.printed = false;
        }
    }
}
