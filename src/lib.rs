//! Langfix - lang-file auditor for XAML resource dictionaries
//!
//! Langfix is a CLI tool and library for keeping XAML-style localization
//! dictionaries (`<sys:String x:Key="...">` entries) in shape. It finds
//! keys never referenced in the source tree, comments them out without
//! disturbing the file's formatting, and syncs missing entries between
//! translation files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, handlers)
//! - `core`: Line scanner, detector, and the repair/sync transforms
//! - `error`: Error taxonomy shared by all core operations

pub mod cli;
pub mod core;
pub mod error;
