pub use compact::{compact_by, compact_remove, compact_runs};
pub use retain::{Retain, RetainFn};

#[allow(clippy::module_inception)]
mod compact;
mod retain;
