//! Repair transform: comment out unused entries in place.
//!
//! Every untouched line is carried over verbatim, so the output always has
//! exactly as many lines as the input. Entries already sitting inside a
//! comment are skipped by the scanner, which makes the transform
//! idempotent.

use std::collections::HashSet;

use tracing::debug;

use crate::core::scan::{LineClass, LineScanner, ScanState, is_one_liner, padding};
use crate::error::{Error, Result};

/// Rewrite `lines`, wrapping every entry whose key is in `unused` in an
/// XML comment.
///
/// A one-liner entry becomes `<!-- <entry> -->` on its own line; a
/// multi-line entry gets `<!-- ` prepended to its opening line and ` -->`
/// appended to its closing line, with the body untouched. Fails with
/// [`Error::UnterminatedEntry`] when a matched multi-line entry never
/// reaches its closing tag.
pub fn repair(lines: Vec<String>, unused: &HashSet<String>) -> Result<Vec<String>> {
    let needles: Vec<(&str, String)> = unused
        .iter()
        .map(|key| (key.as_str(), format!("x:key=\"{}\"", key.to_lowercase())))
        .collect();

    let mut scanner = LineScanner::default();
    let mut out = Vec::with_capacity(lines.len());
    let mut pending_key = "";

    for line in lines {
        match scanner.classify(&line) {
            LineClass::Blank | LineClass::Comment | LineClass::ResourceBody => out.push(line),
            LineClass::ResourceEnd => out.push(format!("{line} -->")),
            LineClass::Content => {
                let lower = line.to_lowercase();
                let matched = needles
                    .iter()
                    .find(|(_, needle)| lower.contains(needle.as_str()))
                    .map(|(key, _)| *key);

                let Some(key) = matched else {
                    out.push(line);
                    continue;
                };

                debug!("commenting out unused entry {key}");

                let trimmed = line.trim();
                let pad = padding(&line);
                if is_one_liner(trimmed) {
                    out.push(format!("{pad}<!-- {trimmed} -->"));
                } else {
                    out.push(format!("{pad}<!-- {trimmed}"));
                    pending_key = key;
                    scanner.mark_multiline();
                }
            }
        }
    }

    if scanner.state() == ScanState::InMultilineResource {
        return Err(Error::UnterminatedEntry(pending_key.to_string()));
    }

    Ok(out)
}
