use std::io;

use thiserror::Error;

use crate::interval::IntervalKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cycle count must be at least 1")]
    NoCycles,
    #[error("{kind} duration must be greater than zero")]
    ZeroDuration { kind: IntervalKind },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("could not resolve current directory: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("could not show notification: {0}")]
    Push(#[from] notify_rust::error::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
