use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::spec::SpecFindOptions;

/// Pattern substituted when the caller passes an empty one.
pub const C_PATTERN_MATCH_ALL: &str = ".*";

////////////////////////////////////////////////////////////////////////////////
// #region EntryModel

/// One visited filesystem node, as seen by the name filter.
pub trait FindEntry {
    /// Full path of the entry, rooted at the walk root.
    fn path(&self) -> &Path;
    /// Bare final path segment.
    fn file_name(&self) -> &OsStr;
    /// Whether the walker would descend into this entry.
    fn is_dir(&self) -> bool;
}

impl FindEntry for walkdir::DirEntry {
    fn path(&self) -> &Path {
        walkdir::DirEntry::path(self)
    }

    fn file_name(&self) -> &OsStr {
        walkdir::DirEntry::file_name(self)
    }

    fn is_dir(&self) -> bool {
        self.file_type().is_dir()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    if pattern.is_empty() {
        return Regex::new(C_PATTERN_MATCH_ALL);
    }
    Regex::new(pattern)
}

/// Name filter plus prune rule for one find run.
#[derive(Debug, Clone)]
pub(crate) struct SpecFindFilter {
    path_root: PathBuf,
    pattern: Regex,
    if_recursive: bool,
}

impl SpecFindFilter {
    pub(crate) fn new(path_root: &Path, pattern: Regex, if_recursive: bool) -> Self {
        Self {
            path_root: path_root.to_path_buf(),
            pattern,
            if_recursive,
        }
    }

    pub(crate) fn from_options(
        path_root: &Path,
        spec_find_options: &SpecFindOptions,
    ) -> Result<Self, regex::Error> {
        let pattern = compile_pattern(&spec_find_options.pattern)?;
        Ok(Self::new(path_root, pattern, spec_find_options.if_recursive))
    }

    pub(crate) fn is_match<T: FindEntry + ?Sized>(&self, entry: &T) -> bool {
        self.pattern.is_match(&entry.file_name().to_string_lossy())
    }

    /// The root is never pruned, whatever the recursive flag says.
    pub(crate) fn should_prune<T: FindEntry + ?Sized>(&self, entry: &T) -> bool {
        entry.is_dir() && entry.path() != self.path_root && !self.if_recursive
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Walker

/// Depth-first walker over `path_root`, siblings in file-name order.
///
/// A symlinked root is only descended when symlinks are followed, so every
/// directory the walker opens reports `file_type().is_dir()`.
pub(crate) fn build_walker(path_root: &Path, spec_find_options: &SpecFindOptions) -> WalkCursor {
    let iter_walk = WalkDir::new(path_root)
        .follow_links(spec_find_options.if_follow_symlinks)
        .follow_root_links(spec_find_options.if_follow_symlinks)
        .sort_by_file_name()
        .into_iter();
    WalkCursor::new(iter_walk)
}

fn depth_of(res_entry: &walkdir::Result<walkdir::DirEntry>) -> usize {
    match res_entry {
        Ok(entry) => entry.depth(),
        Err(e) => e.depth(),
    }
}

/// Walker with one item of lookahead past every directory.
///
/// `walkdir` yields a directory before the error from reading it. The cursor
/// reads one item ahead and, when that item is the directory's own read
/// error, yields the error in place of the directory.
#[derive(Debug)]
pub(crate) struct WalkCursor {
    iter_walk: walkdir::IntoIter,
    /// `Some(None)` records that the walker is exhausted.
    res_peeked: Option<Option<walkdir::Result<walkdir::DirEntry>>>,
    /// Depth of the directory yielded last, while its listing is still open.
    n_depth_dir_open: Option<usize>,
}

impl WalkCursor {
    pub(crate) fn new(iter_walk: walkdir::IntoIter) -> Self {
        Self {
            iter_walk,
            res_peeked: None,
            n_depth_dir_open: None,
        }
    }

    pub(crate) fn next(&mut self) -> Option<walkdir::Result<walkdir::DirEntry>> {
        self.n_depth_dir_open = None;
        let res_entry = match self.res_peeked.take() {
            Some(v) => v,
            None => self.iter_walk.next(),
        }?;
        let entry = match res_entry {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        if !entry.file_type().is_dir() {
            return Some(Ok(entry));
        }

        let res_next = self.iter_walk.next();
        let if_dir_unreadable = matches!(
            &res_next,
            Some(Err(e)) if e.path() == Some(entry.path())
        );
        if if_dir_unreadable {
            return res_next;
        }
        self.res_peeked = Some(res_next);
        self.n_depth_dir_open = Some(entry.depth());
        Some(Ok(entry))
    }

    /// Drop the rest of the directory yielded last.
    pub(crate) fn skip_current_dir(&mut self) {
        let Some(n_depth_dir) = self.n_depth_dir_open.take() else {
            return;
        };
        match self.res_peeked.take() {
            Some(Some(res_child)) if depth_of(&res_child) > n_depth_dir => {
                // A child directory read ahead is already open on the walker stack.
                if matches!(&res_child, Ok(child) if child.file_type().is_dir()) {
                    self.iter_walk.skip_current_dir();
                }
                self.iter_walk.skip_current_dir();
            }
            // Empty directory: the walker already closed it.
            res_other => self.res_peeked = res_other,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
