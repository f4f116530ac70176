//! Sync transform: project the source file's entries, preferring the
//! target's version of every entry it already has.
//!
//! The walk follows the source file's entry order. Blank lines and comment
//! ranges are copied through unchanged. Structural boilerplate outside
//! comments (the resource-dictionary root tag, xmlns declarations) is
//! dropped from the output; this mirrors the behavior this tool has always
//! had and is pinned by a test rather than silently fixed.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::core::scan::{LineClass, LineScanner, RESOURCE_CLOSE, is_one_liner};
use crate::error::{Error, Result};

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"x:Key="([^"]+)""#).expect("key regex is valid"));

/// Extract the `x:Key` attribute value from a declaration line, if any.
pub fn extract_key(line: &str) -> Option<&str> {
    KEY_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Merge `source_lines` and `target_lines` into a new line sequence.
///
/// Every key encountered in the source is emitted exactly once: as the
/// target file's entry when `target_keys` contains it (preserving
/// target-specific translations), otherwise as the source file's entry.
pub fn sync(
    source_lines: &[String],
    target_lines: &[String],
    target_keys: &HashSet<String>,
) -> Result<Vec<String>> {
    let mut scanner = LineScanner::default();
    let mut out = Vec::new();

    for line in source_lines {
        match scanner.classify(line) {
            LineClass::Blank | LineClass::Comment => out.push(line.clone()),
            // The scanner never gets a multi-line mark here; entry bodies
            // are re-emitted through extraction below.
            LineClass::ResourceBody | LineClass::ResourceEnd => {}
            LineClass::Content => {
                let Some(key) = extract_key(line.trim()) else {
                    continue;
                };

                if target_keys.contains(key) {
                    append_entry(&mut out, target_lines, key)?;
                } else {
                    append_entry(&mut out, source_lines, key)?;
                    debug!("added missing key {key} from source file");
                }
            }
        }
    }

    Ok(out)
}

/// Append the full entry for `key` from `lines`: the first line containing
/// its declaration through the line closing the element, inclusive.
fn append_entry(out: &mut Vec<String>, lines: &[String], key: &str) -> Result<()> {
    let needle = format!("x:key=\"{}\"", key.to_lowercase());
    let start = lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
        .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;

    if is_one_liner(lines[start].trim()) {
        out.push(lines[start].clone());
        return Ok(());
    }

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.trim().ends_with(RESOURCE_CLOSE))
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| Error::UnterminatedEntry(key.to_string()))?;

    out.extend(lines[start..=end].iter().cloned());
    Ok(())
}
