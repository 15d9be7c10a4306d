use crate::context::{self, ConfigStore, ContextError, ContextResult};
use crate::prompt::{ListSelector, color_enabled};
use std::io;

pub fn handle(store: &impl ConfigStore) -> ContextResult<()> {
    let candidates = context::list(store)?;

    if candidates.is_empty() {
        println!("No contexts found in {}", store.path().display());
        return Ok(());
    }

    ListSelector::new(color_enabled(io::stdout()))
        .render(&candidates, &mut io::stdout().lock())
        .map_err(ContextError::Output)
}
