mod history;
mod remote;

pub use history::extract_commit_dates;
pub use remote::{ensure_clone, RepoUrl};
