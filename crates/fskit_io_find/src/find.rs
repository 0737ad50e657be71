//! Name-filtered directory traversal with a per-entry callback.

use std::path::Path;

use crate::report::{ReportFind, ReportFindBuilder};
use crate::spec::{EnumWalkStep, FindError, SpecFindOptions};
use crate::util::{FindEntry, SpecFindFilter, build_walker};

/// Adapter between the walker and the caller's callback.
///
/// Decides, per visited entry, whether the callback runs and whether the
/// walker may descend further. Order of checks:
/// 1. an incoming walk error is returned as-is;
/// 2. a basename match runs the callback, whose error wins over everything else;
/// 3. a non-root directory in a non-recursive run is pruned.
pub(crate) struct FindWalkFn<F> {
    spec_find_filter: SpecFindFilter,
    callback: F,
    builder_find_report: ReportFindBuilder,
}

impl<F> FindWalkFn<F> {
    pub(crate) fn new(spec_find_filter: SpecFindFilter, callback: F) -> Self {
        Self {
            spec_find_filter,
            callback,
            builder_find_report: ReportFindBuilder::default(),
        }
    }

    pub(crate) fn call<T, E>(
        &mut self,
        res_entry: Result<T, walkdir::Error>,
    ) -> Result<EnumWalkStep, FindError<E>>
    where
        T: FindEntry,
        F: FnMut(&Path, &T) -> Result<(), E>,
    {
        let entry = match res_entry {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(path = ?e.path(), error = %e, "walk failed");
                return Err(FindError::Walk(e));
            }
        };
        self.builder_find_report.add_scanned();

        if self.spec_find_filter.is_match(&entry) {
            self.builder_find_report.add_matched();
            if let Err(e) = (self.callback)(entry.path(), &entry) {
                tracing::debug!(path = %entry.path().display(), "callback failed");
                return Err(FindError::Callback(e));
            }
        }

        if self.spec_find_filter.should_prune(&entry) {
            self.builder_find_report.add_pruned();
            tracing::trace!(path = %entry.path().display(), "pruned directory");
            return Ok(EnumWalkStep::SkipDir);
        }

        Ok(EnumWalkStep::Continue)
    }

    pub(crate) fn into_report(self) -> ReportFind {
        self.builder_find_report.build()
    }
}

/// Walk `root` and call `callback` for every entry whose basename matches
/// `pattern`.
///
/// An empty `pattern` matches everything. With `recursive == false` only the
/// root and its direct children are visited; child directories are still
/// matched, just not descended into.
///
/// The first error aborts the walk and is returned inside [`FindError`]:
/// pattern compilation (before anything is visited), walker, or callback.
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
///
/// let mut l_paths: Vec<PathBuf> = Vec::new();
/// fskit_io_find::find("logs", r"\.log$", false, |path, _entry| {
///     l_paths.push(path.to_path_buf());
///     Ok::<(), std::io::Error>(())
/// })
/// .expect("find logs");
/// ```
pub fn find<P, F, E>(
    root: P,
    pattern: &str,
    recursive: bool,
    callback: F,
) -> Result<(), FindError<E>>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &walkdir::DirEntry) -> Result<(), E>,
{
    let spec_find_options = SpecFindOptions {
        pattern: pattern.to_string(),
        if_recursive: recursive,
        ..SpecFindOptions::default()
    };
    find_with_options(root, &spec_find_options, callback)?;
    Ok(())
}

/// Options-struct form of [`find`], returning run counters on success.
pub fn find_with_options<P, F, E>(
    root: P,
    spec_find_options: &SpecFindOptions,
    callback: F,
) -> Result<ReportFind, FindError<E>>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &walkdir::DirEntry) -> Result<(), E>,
{
    let path_root = root.as_ref();
    let spec_find_filter = SpecFindFilter::from_options(path_root, spec_find_options)?;
    tracing::debug!(
        root = %path_root.display(),
        pattern = %spec_find_options.pattern,
        recursive = spec_find_options.if_recursive,
        "find started"
    );

    let mut walk_cursor = build_walker(path_root, spec_find_options);
    let mut find_walk_fn = FindWalkFn::new(spec_find_filter, callback);
    while let Some(res_entry) = walk_cursor.next() {
        match find_walk_fn.call(res_entry)? {
            EnumWalkStep::Continue => {}
            EnumWalkStep::SkipDir => walk_cursor.skip_current_dir(),
        }
    }

    let report = find_walk_fn.into_report();
    tracing::debug!(
        scanned = report.cnt_scanned,
        matched = report.cnt_matched,
        pruned = report.cnt_pruned,
        "find finished"
    );
    Ok(report)
}
