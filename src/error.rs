//! Error types for the Red-Blue Nim crate

use thiserror::Error;

use crate::nim::Pile;

/// Main error type for the Red-Blue Nim crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal action: cannot remove {count} from the {pile} pile ({available} available)")]
    IllegalAction {
        pile: Pile,
        count: u8,
        available: u32,
    },

    #[error("utility is undefined for non-terminal state (red={red}, blue={blue})")]
    NotTerminal { red: u32, blue: u32 },

    #[error("invalid pile '{input}' (expected 'red' or 'blue')")]
    ParsePile { input: String },

    #[error("invalid variant '{input}' (expected 'standard' or 'misere')")]
    ParseVariant { input: String },

    #[error("invalid player '{input}' (expected 'computer' or 'human')")]
    ParsePlayer { input: String },

    #[error("invalid algorithm '{input}' (expected 'minimax' or 'alpha-beta')")]
    ParseAlgorithm { input: String },

    #[error("invalid removal count '{input}' (expected 1 or 2)")]
    ParseCount { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
