use super::Candidate;
use crate::config::display::CURRENT_MARKER;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints every context, one per line, with the current one marked.
/// Read-only: it never selects anything.
#[derive(Debug, Clone, Copy)]
pub struct ListSelector {
    color: bool,
}

impl ListSelector {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render<W: Write>(&self, candidates: &[Candidate], out: &mut W) -> io::Result<()> {
        for candidate in candidates {
            match (candidate.is_current(), self.color) {
                (true, true) => writeln!(out, "{} {}", candidate.name(), CURRENT_MARKER.green())?,
                (true, false) => writeln!(out, "{} {CURRENT_MARKER}", candidate.name())?,
                (false, _) => writeln!(out, "{}", candidate.name())?,
            }
        }

        Ok(())
    }
}
