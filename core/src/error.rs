use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The document or the stop-word list could not be read.
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
