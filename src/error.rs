use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch the native window: {0}")]
    Launch(#[from] eframe::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
