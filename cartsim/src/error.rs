//! Error types for scenario loading and series export.
//!
//! The physics itself never fails; only I/O at the edges does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsimError {
    /// Reading a scenario or writing an export failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A scenario file is not valid YAML for `ScenarioConfig`.
    #[error("invalid scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
