use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
