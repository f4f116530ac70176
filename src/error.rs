//! Error types for lang-file parsing and transformation.
//!
//! Every fallible core operation returns these; the CLI layer wraps them
//! in `anyhow` with path context before reporting.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("missing `xmlns:sys` namespace declaration in {0}")]
    MissingNamespace(PathBuf),

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("no resource keys parsed from the lang file")]
    EmptyKeySet,

    #[error("key `{0}` not found in lang file")]
    KeyNotFound(String),

    #[error("entry `{0}` never reaches its closing tag")]
    UnterminatedEntry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
