//! Core lang-file engine.
//!
//! - `resource`: key/value index over a lang file (XML parse)
//! - `scan`: shared comment/multi-line-resource line scanner
//! - `detect`: unused-key detection over a source tree
//! - `repair`: comment out unused entries
//! - `sync`: merge missing entries from a source file into a target

pub mod detect;
pub mod repair;
pub mod resource;
pub mod scan;
pub mod sync;

pub use detect::detect_unused;
pub use repair::repair;
pub use resource::parse_lang_file;
pub use scan::{LineClass, LineScanner, ScanState};
pub use sync::sync;
