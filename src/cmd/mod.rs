pub mod current;
pub mod list;
pub mod switch;

use crate::config::defaults;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kubectx",
    version,
    about = "Switch Kubernetes Context",
    long_about = "Switch the current context of a kubeconfig file. Without arguments an interactive list of contexts is shown.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Context to switch to without prompting
    pub context: Option<String>,

    /// Path to the kubeconfig file (overrides KUBECONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List Kubernetes Contexts
    #[command(alias = "list")]
    Ls,
    /// Show the current Kubernetes Context
    Current,
}
