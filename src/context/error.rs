use std::{io, path::PathBuf};
use thiserror::Error;

pub type ContextResult<T> = Result<T, ContextError>;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Unable to find kubeconfig file: set KUBECONFIG or pass --kubeconfig")]
    ConfigNotFound,
    #[error("Error loading kubeconfig {}: {source}", .path.display())]
    Load { path: PathBuf, source: LoadError },
    #[error("Context '{0}' not found")]
    UnknownContext(String),
    #[error("No contexts found in {}", .0.display())]
    NoContexts(PathBuf),
    #[error("Error writing kubeconfig file {}: {source}", .path.display())]
    Persist { path: PathBuf, source: PersistError },
    #[error("Prompt selection failed: {0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Why a kubeconfig could not be read into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Malformed(String),
}

/// Why a kubeconfig could not be written back.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
