use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::git::{ensure_clone, extract_commit_dates, RepoUrl};
use crate::plotting::{render_chart, render_chart_to_bytes};
use crate::utils::aggregate_by_month;
use crate::viewer;

/// Chart path used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "commits_over_time.png";

#[derive(Parser)]
#[command(name = "commitplot")]
#[command(about = "Clone a git repository over SSH and chart its commits per month")]
#[command(version)]
pub struct Args {
    #[arg(help = "Repository URL (https://host/owner/repo or git@host:owner/repo.git)")]
    pub url: Option<String>,

    #[arg(
        long,
        conflicts_with = "url",
        help = "Chart an existing local clone instead of cloning a URL"
    )]
    pub workdir: Option<PathBuf>,

    #[arg(long, help = "SSH private key to clone with")]
    pub ssh_key: Option<PathBuf>,

    #[arg(long, help = "Directory clones are placed under")]
    pub clone_dir: Option<PathBuf>,

    #[arg(short, long, help = "Output image path")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Open the chart in a window after rendering")]
    pub show: bool,

    #[arg(long, help = "Path to a config file")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn execute(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        let workdir = match self.workdir {
            Some(dir) => dir,
            None => {
                let url_text = self
                    .url
                    .or(config.repo_url)
                    .context("no repository URL given on the command line or in the config")?;
                let url = RepoUrl::parse(&url_text)?;
                info!("repository SSH URL is {}", url.ssh_url());

                let clone_dir = self
                    .clone_dir
                    .or(config.clone_dir)
                    .unwrap_or_else(|| PathBuf::from("."));
                let ssh_key = self.ssh_key.or(config.ssh_key);
                ensure_clone(&url, &clone_dir, ssh_key.as_deref())?
            }
        };

        let records = extract_commit_dates(&workdir)?;
        println!("Number of commits: {}", records.len());

        let series = aggregate_by_month(&records);
        info!(
            "aggregated {} commits into {} months",
            records.len(),
            series.len()
        );

        let show = self.show || config.show.unwrap_or(false);
        let output = self.output.or(config.output);

        // Display-only runs keep the filesystem untouched
        if show && output.is_none() {
            let png = render_chart_to_bytes(&series)?;
            viewer::show_chart(png)?;
            return Ok(());
        }

        let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        render_chart(&series, &path)?;
        println!("Chart written to {}", path.display());

        if show {
            let png = std::fs::read(&path)
                .with_context(|| format!("could not read chart back from {}", path.display()))?;
            viewer::show_chart(png)?;
        }

        Ok(())
    }
}
