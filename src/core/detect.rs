//! Unused-key detection over a source tree.
//!
//! A declared key counts as used when any of its rendered usage patterns
//! appears as a case-insensitive substring anywhere in the scanned files.
//! The scan is a plain substring search over raw lines; source-code
//! comments are deliberately not stripped, so a key referenced only inside
//! a code comment still counts as used.

use std::{
    collections::{HashSet, VecDeque},
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};

/// Subtrees skipped during the walk, matched as a case-insensitive prefix
/// of the root-relative path.
const EXCLUSIONS: &[&str] = &["bin", "obj", "Assets/Language"];

/// File extensions eligible for the usage search.
const MATCH_EXTENSIONS: &[&str] = &["cs", "axaml"];

/// Usage templates. `{0}` is the key placeholder; doubled braces collapse
/// to literal braces after substitution.
const SEARCH_PATTERNS: &[&str] = &[
    "{{DynamicResource {0}}}",
    "ResourceKey=\"{0}\"",
    "LangHelper.{0}",
    "ErrorMessageResourceName = \"{0}\"",
    "AddTitle(\"{0}\")",
    "AddDescription(\"{0}\")",
];

fn render_pattern(template: &str, key: &str) -> String {
    template
        .replace("{0}", key)
        .replace("{{", "{")
        .replace("}}", "}")
}

/// Render every usage pattern for every declared key, lowercased for
/// case-insensitive matching. Each rendered pattern keeps its raw key so a
/// match can be attributed back.
fn rendered_patterns(declared: &HashSet<String>) -> Vec<(String, String)> {
    declared
        .iter()
        .flat_map(|key| {
            SEARCH_PATTERNS
                .iter()
                .map(move |template| (key.clone(), render_pattern(template, key).to_lowercase()))
        })
        .collect()
}

fn is_excluded(root: &Path, dir: &Path) -> bool {
    let Ok(rel) = dir.strip_prefix(root) else {
        return false;
    };
    let rel = rel.to_string_lossy().replace('\\', "/").to_lowercase();
    EXCLUSIONS
        .iter()
        .any(|prefix| rel.starts_with(&prefix.to_lowercase()))
}

fn has_match_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MATCH_EXTENSIONS
                .iter()
                .any(|m| ext.eq_ignore_ascii_case(m))
        })
}

/// Keys from `declared` with zero pattern matches under `root`.
///
/// The directory walk is a sequential breadth-first traversal so the
/// exclusion-prefix check stays a simple root-relative comparison; the
/// per-line pattern matching inside each file runs on the rayon pool and
/// is merged via fold/reduce.
///
/// An empty `declared` set is an error: upstream parsing produced nothing,
/// which almost certainly means the lang file could not be read
/// meaningfully, not that the project has no keys.
pub fn detect_unused(root: &Path, declared: &HashSet<String>) -> Result<HashSet<String>> {
    if declared.is_empty() {
        return Err(Error::EmptyKeySet);
    }

    let patterns = rendered_patterns(declared);
    let mut used: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        if is_excluded(root, &dir) {
            continue;
        }
        if !dir.is_dir() {
            continue;
        }

        debug!("searching in {}", dir.display());

        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                queue.push_back(path);
            } else if has_match_extension(&path) {
                debug!("searching in {}", path.display());
                used.extend(scan_file(&path, &patterns)?);
            }
        }
    }

    Ok(declared.difference(&used).cloned().collect())
}

/// Raw keys whose patterns match at least one line of `path`.
fn scan_file(path: &Path, patterns: &[(String, String)]) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();

    let matched = lines
        .par_iter()
        .fold(HashSet::new, |mut acc: HashSet<String>, line| {
            let line = line.to_lowercase();
            for (raw, pattern) in patterns {
                if line.contains(pattern.as_str()) {
                    acc.insert(raw.clone());
                }
            }
            acc
        })
        .reduce(HashSet::new, |mut a, b| {
            a.extend(b);
            a
        });

    Ok(matched)
}
