// Crate error type.
// Every pattern operation is total; the only things that can fail are the
// output sink and parsing a TOML override.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid demo config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;
