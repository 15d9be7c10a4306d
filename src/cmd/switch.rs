use crate::config::display::GOODBYE;
use crate::context::{self, ConfigStore, ContextError, ContextResult, SwitchOutcome};
use crate::prompt::{InteractiveSelector, NamedSelector, Selector, color_enabled};
use log::debug;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn handle(store: &impl ConfigStore, name: Option<String>) -> ContextResult<()> {
    let color = color_enabled(io::stdout());
    let mut out = io::stdout().lock();

    match name {
        Some(name) => run(store, &NamedSelector::new(name), color, &mut out),
        None => run(store, &InteractiveSelector, color, &mut out),
    }
}

fn run<S, P, W>(store: &S, selector: &P, color: bool, out: &mut W) -> ContextResult<()>
where
    S: ConfigStore + ?Sized,
    P: Selector + ?Sized,
    W: Write,
{
    let outcome = context::switch(store, selector)?;
    report(&outcome, color, out).map_err(ContextError::Output)
}

/// A cancelled prompt is reported as a normal, successful exit.
fn report<W: Write>(outcome: &SwitchOutcome, color: bool, out: &mut W) -> io::Result<()> {
    match outcome {
        SwitchOutcome::Switched { name, previous } => {
            if previous.as_ref() == Some(name) {
                debug!("Context {name} was already current");
            }
            let message = format!("Switched to context: {name}");
            if color {
                writeln!(out, "{}", message.green())
            } else {
                writeln!(out, "{message}")
            }
        }
        SwitchOutcome::Cancelled => writeln!(out, "{GOODBYE}"),
    }
}
