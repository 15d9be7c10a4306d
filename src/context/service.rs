use super::{ConfigStore, ContextError, ContextName, ContextRegistry, ContextResult};
use crate::prompt::{Candidate, Selection, Selector, candidates};
use log::{debug, info};

#[derive(Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched {
        name: ContextName,
        previous: Option<ContextName>,
    },
    Cancelled,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CurrentContext {
    pub name: ContextName,
    pub namespace: Option<String>,
}

pub fn load_registry<S: ConfigStore + ?Sized>(store: &S) -> ContextResult<ContextRegistry> {
    let config = store.load()?;

    let registry = ContextRegistry::from_config(config).map_err(|source| ContextError::Load {
        path: store.path().to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} context(s) from {}",
        registry.len(),
        store.path().display()
    );

    Ok(registry)
}

/// Load, let `selector` pick, point current-context at the pick and write
/// the file back. Nothing is written unless a context was chosen and
/// accepted by the registry.
pub fn switch<S, P>(store: &S, selector: &P) -> ContextResult<SwitchOutcome>
where
    S: ConfigStore + ?Sized,
    P: Selector + ?Sized,
{
    let mut registry = load_registry(store)?;

    if registry.is_empty() {
        return Err(ContextError::NoContexts(store.path().to_path_buf()));
    }

    let previous = registry.current().cloned();

    let name = match selector.select(candidates(&registry))? {
        Selection::Chosen(candidate) => candidate.into_name(),
        Selection::Cancelled => {
            info!("Selection cancelled, kubeconfig left untouched");
            return Ok(SwitchOutcome::Cancelled);
        }
    };

    registry.set_current(name.as_str())?;
    store.persist(registry.config())?;

    info!(
        "Switched context from {} to {}",
        previous.as_ref().map(ContextName::as_str).unwrap_or("<none>"),
        name
    );

    Ok(SwitchOutcome::Switched { name, previous })
}

pub fn list<S: ConfigStore + ?Sized>(store: &S) -> ContextResult<Vec<Candidate>> {
    let registry = load_registry(store)?;
    Ok(candidates(&registry))
}

pub fn current<S: ConfigStore + ?Sized>(store: &S) -> ContextResult<Option<CurrentContext>> {
    let registry = load_registry(store)?;

    let Some(name) = registry.current().cloned() else {
        return Ok(None);
    };

    let namespace = registry
        .definition(name.as_str())
        .and_then(|definition| definition.get("context"))
        .and_then(|context| context.get("namespace"))
        .and_then(|namespace| namespace.as_str())
        .map(str::to_owned);

    Ok(Some(CurrentContext { name, namespace }))
}
