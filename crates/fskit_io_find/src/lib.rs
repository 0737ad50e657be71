//! `fskit_io_find` v1:
//! Name-filtered directory traversal.
//!
//! Modules:
//! - `find`   : callback traversal and per-entry filter adapter
//! - `iter`   : lazy iterator over matched entries
//! - `spec`   : options/errors
//! - `report` : run-time report model
//! - `util`   : entry model, pattern compile, walker setup

pub mod find;
pub mod iter;
pub mod report;
pub mod spec;
mod util;

pub use find::{find, find_with_options};
pub use iter::{FindIter, find_iter};
pub use report::{ReportFind, ReportFindBuilder};
pub use spec::{FindError, SpecFindOptions};
pub use util::{C_PATTERN_MATCH_ALL, FindEntry};
