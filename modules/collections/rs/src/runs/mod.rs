pub use identical::Identical;
pub use longest::{longest_max_run, longest_run_of, max_run};
pub use run::Run;
pub use scan::{runs, Runs};

mod identical;
mod longest;
mod run;
mod scan;
