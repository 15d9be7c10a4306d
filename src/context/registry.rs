use super::{ContextError, ContextName, ContextResult, KubeConfig, LoadError};
use log::warn;
use serde_yaml::Value;
use std::collections::HashMap;

/// Named contexts of one kubeconfig plus its current pointer.
///
/// Names keep file order for display; lookups go through `index`.
#[derive(Debug)]
pub struct ContextRegistry {
    config: KubeConfig,
    entries: Vec<(ContextName, Value)>,
    index: HashMap<ContextName, usize>,
    current: Option<ContextName>,
}

impl ContextRegistry {
    pub fn from_config(config: KubeConfig) -> Result<Self, LoadError> {
        let mut entries: Vec<(ContextName, Value)> = Vec::new();
        let mut index: HashMap<ContextName, usize> = HashMap::new();

        for (name, definition) in config.named_contexts()? {
            if index.contains_key(&name) {
                warn!("Context '{name}' is defined more than once; using the first definition");
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push((name, definition));
        }

        let current = match config.current_context() {
            Some(name) if index.contains_key(name) => Some(ContextName::from(name)),
            Some(name) => {
                warn!("current-context '{name}' does not match any context");
                None
            }
            None => None,
        };

        Ok(Self {
            config,
            entries,
            index,
            current,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &ContextName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn current(&self) -> Option<&ContextName> {
        self.current.as_ref()
    }

    pub fn definition(&self, name: &str) -> Option<&Value> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Points `current-context` at `name`. Unknown names leave everything as
    /// it was.
    pub fn set_current(&mut self, name: &str) -> ContextResult<()> {
        let Some(&position) = self.index.get(name) else {
            return Err(ContextError::UnknownContext(name.to_string()));
        };

        let name = self.entries[position].0.clone();
        self.config.set_current_context(&name);
        self.current = Some(name);

        Ok(())
    }

    pub fn config(&self) -> &KubeConfig {
        &self.config
    }
}
