//! Pull-based counterpart of [`crate::find()`].

use std::path::Path;

use crate::spec::SpecFindOptions;
use crate::util::{SpecFindFilter, WalkCursor, build_walker};

/// Iterator over matched entries of one walk.
///
/// Yields entries in the order [`crate::find()`] would call its callback and
/// prunes the same subtrees. A walk error is yielded once; the iterator is
/// exhausted afterwards.
#[derive(Debug)]
pub struct FindIter {
    walk_cursor: WalkCursor,
    spec_find_filter: SpecFindFilter,
    if_done: bool,
}

impl FindIter {
    fn new(path_root: &Path, spec_find_options: &SpecFindOptions) -> Result<Self, regex::Error> {
        let spec_find_filter = SpecFindFilter::from_options(path_root, spec_find_options)?;
        Ok(Self {
            walk_cursor: build_walker(path_root, spec_find_options),
            spec_find_filter,
            if_done: false,
        })
    }
}

impl Iterator for FindIter {
    type Item = Result<walkdir::DirEntry, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.if_done {
            return None;
        }
        loop {
            let entry = match self.walk_cursor.next()? {
                Ok(v) => v,
                Err(e) => {
                    self.if_done = true;
                    return Some(Err(e));
                }
            };

            if self.spec_find_filter.should_prune(&entry) {
                self.walk_cursor.skip_current_dir();
            }
            if self.spec_find_filter.is_match(&entry) {
                return Some(Ok(entry));
            }
        }
    }
}

impl std::iter::FusedIterator for FindIter {}

/// Build a [`FindIter`] over `root`.
///
/// Fails only when `spec_find_options.pattern` does not compile.
pub fn find_iter<P: AsRef<Path>>(
    root: P,
    spec_find_options: &SpecFindOptions,
) -> Result<FindIter, regex::Error> {
    FindIter::new(root.as_ref(), spec_find_options)
}
