use std::path::PathBuf;

use starship_persist::PersistError;
use starship_render::FramebufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse viewer config RON: {0}")]
    ConfigParse(String),
    #[error("failed to load model: {0}")]
    Persist(#[from] PersistError),
    #[error("failed to write snapshot: {0}")]
    Framebuffer(#[from] FramebufferError),
    #[error("invalid argument: {0}")]
    BadArgument(String),
}
