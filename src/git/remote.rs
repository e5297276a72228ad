use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::error::{CommitplotError, Result};

/// A repository remote normalized to its SSH form.
///
/// Two input shapes are accepted: scp-style SSH URLs
/// (`git@host:owner/repo.git`), which pass through untouched, and HTTPS URLs
/// (`https://host/owner/repo[.git]`), which are rewritten to the SSH form so
/// the clone can authenticate with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    ssh: String,
    name: String,
}

impl RepoUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim().trim_end_matches('/');

        if let Some(rest) = trimmed.strip_prefix("https://") {
            let mut parts = rest.split('/');
            let host = parts.next().unwrap_or_default();
            let owner = parts.next().unwrap_or_default();
            let repo = parts
                .next()
                .unwrap_or_default()
                .trim_end_matches(".git");
            let unsupported = host.is_empty()
                || owner.is_empty()
                || repo.is_empty()
                || parts.next().is_some();
            if unsupported {
                return Err(CommitplotError::UnsupportedUrl(input.to_string()));
            }
            return Ok(Self {
                ssh: format!("git@{host}:{owner}/{repo}.git"),
                name: repo.to_string(),
            });
        }

        if trimmed.starts_with("git@") {
            if let Some((_, tail)) = trimmed.split_once(':') {
                let name = tail
                    .rsplit('/')
                    .next()
                    .unwrap_or(tail)
                    .trim_end_matches(".git");
                if !name.is_empty() {
                    return Ok(Self {
                        ssh: trimmed.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }

        Err(CommitplotError::UnsupportedUrl(input.to_string()))
    }

    /// The URL handed to `git clone`.
    pub fn ssh_url(&self) -> &str {
        &self.ssh
    }

    /// Directory name the clone lands in, e.g. `repo` for
    /// `git@github.com:owner/repo.git`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Clone the repository under `parent` unless a working copy for it already
/// exists there, and return the working-copy path.
///
/// Reuse is decided purely by directory existence, matching the one-shot
/// nature of the tool. A configured SSH key must exist before cloning and is
/// passed to git through `GIT_SSH_COMMAND`; the clone inherits stdio so its
/// progress stays visible. The process working directory is never changed.
pub fn ensure_clone(url: &RepoUrl, parent: &Path, ssh_key: Option<&Path>) -> Result<PathBuf> {
    let dest = parent.join(url.name());
    if dest.exists() {
        info!("reusing existing working copy at {}", dest.display());
        return Ok(dest);
    }

    if let Some(key) = ssh_key {
        if !key.is_file() {
            return Err(CommitplotError::SshKeyMissing(key.to_path_buf()));
        }
    }

    std::fs::create_dir_all(parent)?;

    info!("cloning {} into {}", url.ssh_url(), dest.display());
    let mut cmd = Command::new("git");
    cmd.arg("clone").arg(url.ssh_url()).arg(&dest);
    if let Some(key) = ssh_key {
        cmd.env("GIT_SSH_COMMAND", format!("ssh -i '{}'", key.display()));
    }

    let status = cmd
        .status()
        .map_err(|e| CommitplotError::Clone(format!("failed to run git: {e}")))?;
    if !status.success() {
        return Err(CommitplotError::Clone(format!(
            "git clone exited with {status}"
        )));
    }

    Ok(dest)
}
