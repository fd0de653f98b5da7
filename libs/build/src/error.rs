use std::{io, path::PathBuf};

use thiserror::Error;

use crate::validate::Violation;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("missing image asset at {path:?}")]
    MissingAsset { path: PathBuf },
    #[error("could not write {path:?}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{city}, {state} does not produce a usable slug")]
    EmptySlug { city: String, state: String },
    #[error("{first} and {second} both map to /{slug}/")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },
    #[error("site failed validation with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> BuildError {
        let path = path.into();
        move |source| BuildError::Io { path, source }
    }
}
