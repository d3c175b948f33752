// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CometError, GitError, Result};
use git2::{Repository as Git2Repo, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CometError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CometError::Git(GitError::NotARepository)
            } else {
                CometError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                CometError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the current branch name.
    pub fn branch_name(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                CometError::Git(GitError::DetachedHead)
            } else {
                CometError::Git(GitError::BranchFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        if head.is_branch() {
            let name = head.shorthand().ok_or_else(|| {
                CometError::Git(GitError::BranchFailed {
                    message: "Invalid branch name encoding".to_string(),
                })
            })?;
            Ok(name.to_string())
        } else {
            Err(CometError::Git(GitError::DetachedHead))
        }
    }

    /// Files with unstaged modifications, plus untracked files.
    pub fn changed_files(&self) -> Result<Vec<String>> {
        self.status_files(|status| {
            status.intersects(
                Status::WT_NEW
                    | Status::WT_MODIFIED
                    | Status::WT_DELETED
                    | Status::WT_RENAMED
                    | Status::WT_TYPECHANGE,
            )
        })
    }

    /// Files with staged changes.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        self.status_files(|status| {
            status.intersects(
                Status::INDEX_NEW
                    | Status::INDEX_MODIFIED
                    | Status::INDEX_DELETED
                    | Status::INDEX_RENAMED
                    | Status::INDEX_TYPECHANGE,
            )
        })
    }

    fn status_files(&self, keep: impl Fn(Status) -> bool) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self.inner.statuses(Some(&mut options)).map_err(|e| {
            CometError::Git(GitError::StatusFailed {
                message: e.message().to_string(),
            })
        })?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            if keep(entry.status()) {
                if let Some(path) = entry.path() {
                    files.push(path.to_string());
                }
            }
        }

        Ok(files)
    }

    /// Check if there are staged changes.
    pub fn has_staged_changes(&self) -> Result<bool> {
        Ok(!self.staged_files()?.is_empty())
    }

    /// Get the HEAD commit.
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.inner.head().map_err(|e| {
            CometError::Git(GitError::BranchFailed {
                message: e.message().to_string(),
            })
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            CometError::Git(GitError::BranchFailed {
                message: e.message().to_string(),
            })
        })?;

        Ok(commit)
    }
}

/// Get the current branch name.
pub fn get_branch_name() -> Result<String> {
    let repo = Repository::open_current()?;
    repo.branch_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();

            let sig = repo.signature().unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .unwrap();
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CometError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_branch_name() {
        let (_dir, repo) = create_test_repo();
        let branch = repo.branch_name().unwrap();
        assert!(!branch.is_empty());
    }

    #[test]
    fn test_changed_and_staged_files() {
        let (dir, repo) = create_test_repo();

        fs::write(dir.path().join("new.txt"), "hello").unwrap();
        assert_eq!(repo.changed_files().unwrap(), vec!["new.txt".to_string()]);
        assert!(repo.staged_files().unwrap().is_empty());

        let mut index = repo.inner().index().unwrap();
        index.add_path(Path::new("new.txt")).unwrap();
        index.write().unwrap();

        assert_eq!(repo.staged_files().unwrap(), vec!["new.txt".to_string()]);
        assert!(repo.has_staged_changes().unwrap());
    }
}
