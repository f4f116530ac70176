//! Command handlers.
//!
//! Everything here is glue: resolve paths, read and write whole files,
//! report results. The actual transformations live in [`crate::core`].

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, error, info};

use super::args::{Arguments, Command, RepairArgs, SyncArgs, UnusedArgs};
use super::exit_status::ExitStatus;
use crate::core::{detect_unused, parse_lang_file, repair, sync};
use crate::error::Error;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Command::Unused(cmd) => unused(cmd),
        Command::Repair(cmd) => repair_lang_file(cmd),
        Command::Sync(cmd) => sync_lang_file(cmd),
    }
}

fn unused(args: UnusedArgs) -> Result<ExitStatus> {
    let (root, lang_path) = resolve_lang_file(&args.root, &args.lang_file)?;

    let unused_keys = resolve_and_check(&root, &lang_path)?;

    if unused_keys.is_empty() {
        println!("{} no unused keys", "\u{2713}".green());
        return Ok(ExitStatus::Success);
    }

    info!("unused keys:");
    let mut sorted: Vec<_> = unused_keys.iter().collect();
    sorted.sort();
    for key in sorted {
        println!("  {}", key.yellow());
    }

    if args.fail_unused {
        error!("lang file has unused lang keys, use the repair command to clean up the file");
        return Ok(ExitStatus::Failure);
    }

    Ok(ExitStatus::Success)
}

fn repair_lang_file(args: RepairArgs) -> Result<ExitStatus> {
    let (root, lang_path) = resolve_lang_file(&args.root, &args.lang_file)?;

    info!("starting repair for {}", lang_path.display());

    let unused_keys = resolve_and_check(&root, &lang_path)?;
    let lines = read_lines(&lang_path)?;
    let repaired = repair(lines, &unused_keys)?;
    write_lines(&args.out_file, &repaired)?;

    info!("repaired lang file written to {}", args.out_file.display());
    Ok(ExitStatus::Success)
}

fn sync_lang_file(args: SyncArgs) -> Result<ExitStatus> {
    let source = resolve_existing(&args.source)?;
    let target = resolve_existing(&args.target)?;

    info!("syncing {} into {}", source.display(), target.display());

    let source_keys = parse_lang_file(&source)
        .with_context(|| format!("failed to parse lang file {}", source.display()))?;
    debug!("source declares {} keys", source_keys.len());

    let target_keys: HashSet<String> = parse_lang_file(&target)
        .with_context(|| format!("failed to parse lang file {}", target.display()))?
        .into_keys()
        .collect();

    let source_lines = read_lines(&source)?;
    let target_lines = read_lines(&target)?;
    let merged = sync(&source_lines, &target_lines, &target_keys)?;
    write_lines(&args.out_file, &merged)?;

    info!("sync completed");
    Ok(ExitStatus::Success)
}

/// Resolve the unused-key set for a lang file against a project root.
fn resolve_and_check(root: &Path, lang_path: &Path) -> Result<HashSet<String>> {
    debug!("resolving lang keys from {}", lang_path.display());
    let keys: HashSet<String> = parse_lang_file(lang_path)
        .with_context(|| format!("failed to parse lang file {}", lang_path.display()))?
        .into_keys()
        .collect();

    debug!("searching for usages under {}", root.display());
    Ok(detect_unused(root, &keys)?)
}

/// The lang file path is given relative to the project root.
fn resolve_lang_file(root: &Path, lang_file: &Path) -> Result<(PathBuf, PathBuf), Error> {
    let root = resolve_existing(root)?;
    let lang_path = resolve_existing(&root.join(lang_file))?;
    Ok((root, lang_path))
}

fn resolve_existing(path: &Path) -> Result<PathBuf, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(fs::canonicalize(path)?)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(String::from).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
