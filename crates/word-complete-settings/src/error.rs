use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading or resolving completion settings.
pub enum SettingsError {
    #[error("JSON parse error: {0}")]
    /// A JSON (`.sublime-settings` / `.json`) document failed to parse.
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    /// A YAML document failed to parse.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("language redirect cycle detected involving '{0}'")]
    /// A chain of language redirects loops back on itself.
    RedirectCycle(String),

    #[error("unsupported settings file: {0}")]
    /// The file extension is not a known settings format.
    UnsupportedFile(String),
}
