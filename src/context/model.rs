use super::LoadError;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{borrow::Borrow, fmt};

const CONTEXTS_KEY: &str = "contexts";
const CURRENT_CONTEXT_KEY: &str = "current-context";
const NAME_KEY: &str = "name";

/// Name of a context, the key of the `contexts` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextName(String);

impl ContextName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContextName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContextName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContextName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ContextName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A whole kubeconfig document.
///
/// Only `current-context` is ever written; every other key, including the
/// bodies of the context entries, is carried through untouched and in its
/// original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KubeConfig {
    document: Mapping,
}

impl KubeConfig {
    pub fn from_yaml(text: &str) -> Result<Self, LoadError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(text)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(document) => Ok(Self { document }),
            _ => Err(LoadError::Malformed(
                "top-level document is not a mapping".to_string(),
            )),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// `None` when the key is missing or empty.
    pub fn current_context(&self) -> Option<&str> {
        self.document
            .get(CURRENT_CONTEXT_KEY)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn set_current_context(&mut self, name: &ContextName) {
        self.document.insert(
            Value::from(CURRENT_CONTEXT_KEY),
            Value::from(name.as_str()),
        );
    }

    /// Entries of the `contexts` list in file order, each paired with its
    /// untouched definition.
    pub fn named_contexts(&self) -> Result<Vec<(ContextName, Value)>, LoadError> {
        let entries = match self.document.get(CONTEXTS_KEY) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Sequence(entries)) => entries,
            Some(_) => {
                return Err(LoadError::Malformed(
                    "`contexts` is not a list".to_string(),
                ));
            }
        };

        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let name = entry.get(NAME_KEY).and_then(Value::as_str).ok_or_else(|| {
                    LoadError::Malformed(format!("context #{} has no name", position + 1))
                })?;
                Ok((ContextName::from(name), entry.clone()))
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn document(&self) -> &Mapping {
        &self.document
    }
}
