use std::error::Error as StdError;

use thiserror::Error;

use crate::config::ConfigError;
use crate::updater::UpdateError;

/// Any failure that ends a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Render `error` followed by each of its causes, joined by `": "`.
///
/// Messages only describe their own level, so every cause appears once.
#[must_use]
pub fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
