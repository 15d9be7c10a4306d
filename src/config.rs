/// Where the kubeconfig lives when nothing overrides it
pub mod kubeconfig {
    /// Environment variable holding an explicit kubeconfig path
    pub const ENV_VAR: &str = "KUBECONFIG";

    /// Directory under the home directory
    pub const DIR_NAME: &str = ".kube";

    /// File name inside `DIR_NAME`
    pub const FILE_NAME: &str = "config";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Strings shown to the user
pub mod display {
    pub const CURRENT_MARKER: &str = "<- current context";

    pub const PROMPT_LABEL: &str = "Select Kubernetes Context";

    /// Prefix of the highlighted entry in the prompt
    pub const ACTIVE_PREFIX: &str = "🚀";

    /// Prefix of the prompt once a context is picked
    pub const ANSWERED_PREFIX: &str = "✔";

    pub const GOODBYE: &str = "Goodbye 👋";

    /// Disables colored output when set to any value
    pub const NO_COLOR_VAR: &str = "NO_COLOR";
}
