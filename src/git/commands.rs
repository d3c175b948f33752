// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for staging, committing and pushing.

use crate::error::{CometError, GitError, Result};
use std::path::Path;
use std::process::Command;

use super::repo::Repository;

/// Stage specific files in a given repository.
pub fn stage_files(repo: &Repository, paths: &[String]) -> Result<()> {
    let mut index = repo.inner().index().map_err(|e| {
        CometError::Git(GitError::CommandFailed {
            command: "index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    for path in paths {
        index.add_path(Path::new(path)).map_err(|e| {
            CometError::Git(GitError::CommandFailed {
                command: format!("add {}", path),
                message: e.message().to_string(),
            })
        })?;
    }

    index.write().map_err(|e| {
        CometError::Git(GitError::CommandFailed {
            command: "write index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    Ok(())
}

/// Create a commit with the given message, returning the new commit id.
pub fn create_commit(repo: &Repository, message: &str) -> Result<String> {
    if !repo.has_staged_changes()? {
        return Err(CometError::Git(GitError::NoStagedChanges));
    }

    let sig = repo.inner().signature().map_err(|e| {
        CometError::Git(GitError::CommitFailed {
            message: format!("Failed to get signature: {}", e.message()),
        })
    })?;

    let mut index = repo.inner().index().map_err(|e| {
        CometError::Git(GitError::CommitFailed {
            message: format!("Failed to get index: {}", e.message()),
        })
    })?;
    let tree_id = index.write_tree().map_err(|e| {
        CometError::Git(GitError::CommitFailed {
            message: format!("Failed to write tree: {}", e.message()),
        })
    })?;
    let tree = repo.inner().find_tree(tree_id).map_err(|e| {
        CometError::Git(GitError::CommitFailed {
            message: format!("Failed to find tree: {}", e.message()),
        })
    })?;

    let parents: Vec<git2::Commit<'_>> = match repo.head_commit() {
        Ok(head) => vec![head],
        Err(_) => vec![], // Initial commit, no parents
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    let commit_oid = repo
        .inner()
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .map_err(|e| {
            CometError::Git(GitError::CommitFailed {
                message: e.message().to_string(),
            })
        })?;

    Ok(commit_oid.to_string())
}

/// Push the current branch using the git CLI.
///
/// Pushing through git2 would need explicit credential callbacks; the git
/// command picks up the user's existing remote and auth setup.
pub fn push(repo: &Repository) -> Result<()> {
    let output = Command::new("git")
        .arg("push")
        .current_dir(repo.workdir())
        .output()
        .map_err(|e| {
            CometError::Git(GitError::PushFailed {
                message: format!("Failed to run git push: {}", e),
            })
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CometError::Git(GitError::PushFailed {
            message: stderr.trim().to_string(),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo_with_file() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        fs::write(dir.path().join("test.txt"), "hello").unwrap();

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_stage_files() {
        let (_dir, repo) = create_test_repo_with_file();

        stage_files(&repo, &["test.txt".to_string()]).unwrap();

        assert!(repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_create_commit() {
        let (_dir, repo) = create_test_repo_with_file();

        stage_files(&repo, &["test.txt".to_string()]).unwrap();
        let sha = create_commit(&repo, "feat: add test file").unwrap();

        assert_eq!(sha.len(), 40);
        let head = repo.head_commit().unwrap();
        assert_eq!(head.message().unwrap(), "feat: add test file");
    }

    #[test]
    fn test_commit_without_staged_changes() {
        let (_dir, repo) = create_test_repo_with_file();

        let result = create_commit(&repo, "feat: nothing staged");
        assert!(matches!(
            result,
            Err(CometError::Git(GitError::NoStagedChanges))
        ));
    }
}
