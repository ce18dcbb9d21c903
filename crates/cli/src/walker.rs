// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive directory walking with visitor-controlled pruning.
//!
//! The visitor sees every entry below the root, in name order, and answers
//! with a [`WalkControl`] that decides whether the walk descends into a
//! directory, skips it, or stops altogether.

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

/// What the walk should do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep going, descending into the entry if it is a directory.
    Continue,
    /// Do not descend into this directory. Same as `Continue` for files.
    SkipSubtree,
    /// Stop the whole walk.
    Abort,
}

/// A visited entry.
#[derive(Debug)]
pub struct WalkEntry<'a> {
    /// Path relative to the walk root.
    pub path: &'a Path,
    /// Final path component.
    pub name: &'a str,
    pub file_type: FileType,
}

impl WalkEntry<'_> {
    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }
}

/// Statistics from a completed walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries handed to the visitor.
    pub visited: usize,
    /// Directories that could not be read.
    pub errors: usize,
    /// Whether the visitor stopped the walk early.
    pub aborted: bool,
}

/// Walk everything below `root`. Symlinks are not followed.
pub fn walk<F>(root: &Path, mut visit: F) -> WalkStats
where
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    let mut stats = WalkStats::default();
    walk_dir(root, Path::new(""), &mut visit, &mut stats);
    stats
}

fn walk_dir<F>(root: &Path, rel: &Path, visit: &mut F, stats: &mut WalkStats)
where
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    let entries = match fs::read_dir(root.join(rel)) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("walk error: {}: {}", root.join(rel).display(), err);
            stats.errors += 1;
            return;
        }
    };

    let mut children: Vec<(String, PathBuf, FileType)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            Some((name.clone(), rel.join(&name), file_type))
        })
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path, file_type) in children {
        stats.visited += 1;
        let entry = WalkEntry {
            path: &path,
            name: &name,
            file_type,
        };

        match visit(&entry) {
            WalkControl::Abort => {
                stats.aborted = true;
                return;
            }
            WalkControl::SkipSubtree => continue,
            WalkControl::Continue => {}
        }

        if file_type.is_dir() {
            walk_dir(root, &path, visit, stats);
            if stats.aborted {
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
