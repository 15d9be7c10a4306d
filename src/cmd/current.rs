use crate::context::{self, ConfigStore, ContextResult};

pub fn handle(store: &impl ConfigStore) -> ContextResult<()> {
    match context::current(store)? {
        Some(current) => match current.namespace {
            Some(namespace) => println!("{} (namespace: {namespace})", current.name),
            None => println!("{}", current.name),
        },
        None => println!("No current context set."),
    }

    Ok(())
}
