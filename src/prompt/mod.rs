mod list_contexts;
mod select_context;

pub use list_contexts::ListSelector;
pub use select_context::InteractiveSelector;

use crate::config::display::{CURRENT_MARKER, NO_COLOR_VAR};
use crate::context::{ContextName, ContextRegistry, ContextResult};
use std::{env, ffi::OsString, fmt, io::IsTerminal};

/// A context as shown to the user: its name, marked when it is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: ContextName,
    current: bool,
}

impl Candidate {
    pub fn new(name: ContextName, current: bool) -> Self {
        Self { name, current }
    }

    pub fn name(&self) -> &ContextName {
        &self.name
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Drops the marker and gives back the plain name.
    pub fn into_name(self) -> ContextName {
        self.name
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.current {
            write!(f, "{} {CURRENT_MARKER}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Candidates in registry order.
pub fn candidates(registry: &ContextRegistry) -> Vec<Candidate> {
    let current = registry.current();
    registry
        .names()
        .map(|name| Candidate::new(name.clone(), current == Some(name)))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    Chosen(Candidate),
    Cancelled,
}

pub trait Selector {
    fn select(&self, candidates: Vec<Candidate>) -> ContextResult<Selection>;
}

/// Picks the context given on the command line.
#[derive(Debug)]
pub struct NamedSelector {
    name: String,
}

impl NamedSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Selector for NamedSelector {
    fn select(&self, candidates: Vec<Candidate>) -> ContextResult<Selection> {
        // Unknown names pass through unmarked; the registry rejects them.
        let chosen = candidates
            .into_iter()
            .find(|candidate| candidate.name().as_str() == self.name)
            .unwrap_or_else(|| Candidate::new(ContextName::from(self.name.as_str()), false));

        Ok(Selection::Chosen(chosen))
    }
}

/// Colors only for a terminal, and never when `NO_COLOR` is set to a
/// non-empty value.
pub fn color_enabled(stream: impl IsTerminal) -> bool {
    color_allowed(env::var_os(NO_COLOR_VAR)) && stream.is_terminal()
}

fn color_allowed(no_color: Option<OsString>) -> bool {
    !no_color.is_some_and(|value| !value.is_empty())
}
