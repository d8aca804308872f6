//! Error types.
//!
//! Every decode, classify and resolve step reports one of these kinds to its
//! caller. The assembler treats any of them as fatal to the whole parse.

use thiserror::Error;

/// Errors produced while decoding or resolving an ELF64 object.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be read in full.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A read would fall outside the buffer or a section's declared extent.
    #[error(
        "{what} at offset {offset:#x} (length {len:#x}) exceeds available {available:#x} bytes"
    )]
    Bounds {
        what: &'static str,
        offset: u64,
        len: u64,
        available: u64,
    },

    /// A cross-reference points at a section of the wrong kind.
    #[error("section {index} is {found}, expected {expected}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// An index or name offset falls outside its table.
    #[error("{what} {index:#x} out of range (table has {len:#x})")]
    Lookup {
        what: &'static str,
        index: u64,
        len: u64,
    },

    /// The document could not be produced from the graph.
    #[error("failed to render document: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
