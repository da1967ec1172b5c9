//! Scene loading errors
//!
//! Only structural problems with the scene file are errors. Cosmetic problems
//! (a missing configured value, a malformed number) are logged and skipped.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read
    #[error("failed to read scene {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene file is not valid TOML or doesn't match the scene layout
    #[error("invalid scene: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two elements share an id
    #[error("duplicate element id: {0}")]
    DuplicateId(String),
}
