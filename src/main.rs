//! Commit history charting tool
//!
//! Clones a Git repository over SSH and charts its commits per month.

use anyhow::Result;
use clap::Parser;
use commitplot::cli::Args;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    args.execute()
}
