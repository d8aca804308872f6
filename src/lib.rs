//! ELF64 object decoder.
//!
//! This library reads an ELF64 object from memory and rebuilds its structure.
//! It is organized into several modules:
//! - `catalog`: names and descriptions for enumerated fields and flag words.
//! - `raw`: fixed-layout decoders for the file, section and program headers.
//! - `symbol`: symbol records and reserved section indices.
//! - `section`: classification of section contents (string/symbol tables).
//! - `model`: the decoded object graph and name resolution.
//! - `loader`: whole-file assembly of the graph.
//! - `present`: JSON documents built from the graph.
//! - `config`: CLI configuration.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod present;
pub mod raw;
pub mod section;
pub mod symbol;
pub mod utils;

pub use error::{Error, Result};
pub use model::ElfObject;
