//! Target directory inspection and preparation

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tokio::fs as async_fs;
use tracing::debug;

/// Version-control metadata that never counts as existing content
pub const VCS_DIR: &str = ".git";

/// What currently lives at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Absent,
    /// No entries, or only a `.git` directory
    Empty,
    NonEmpty,
}

/// Classify `path` for the overwrite prompt.
/// Unreadable or non-directory paths count as non-empty so the user is asked.
pub fn classify(path: &Path) -> DirectoryState {
    if !path.exists() {
        return DirectoryState::Absent;
    }

    // any entry that cannot be read counts as content
    let entries = fs::read_dir(path)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.file_name()))
                .collect::<std::io::Result<Vec<_>>>()
        });
    let Ok(entries) = entries else {
        return DirectoryState::NonEmpty;
    };

    match entries.as_slice() {
        [] => DirectoryState::Empty,
        [only] if only == VCS_DIR => DirectoryState::Empty,
        _ => DirectoryState::NonEmpty,
    }
}

/// Trim and drop trailing slashes from a user-supplied directory
pub fn format_target_dir(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Absolute project root for `target_dir`, with `.` segments removed
pub fn project_root(cwd: &Path, target_dir: &str) -> PathBuf {
    cwd.join(target_dir)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Remove everything in `dir` except the VCS directory
pub async fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let mut entries = async_fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io(dir, e))?
    {
        if entry.file_name() == VCS_DIR {
            continue;
        }

        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;

        debug!(path = %path.display(), "removing existing entry");
        let removed = if file_type.is_dir() {
            async_fs::remove_dir_all(&path).await
        } else {
            async_fs::remove_file(&path).await
        };
        removed.map_err(|e| ScaffoldError::io(&path, e))?;
    }

    Ok(())
}

/// Get the directory ready for writing: emptied when `remove_existing`,
/// otherwise created (with parents) if missing.
pub async fn prepare(root: &Path, remove_existing: bool) -> Result<()> {
    if remove_existing {
        empty_dir(root).await
    } else if !root.exists() {
        async_fs::create_dir_all(root)
            .await
            .map_err(|e| ScaffoldError::io(root, e))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_classify_absent() {
        let dir = tempdir().unwrap();
        assert_eq!(classify(&dir.path().join("nope")), DirectoryState::Absent);
    }

    #[test]
    fn test_classify_empty_and_git_only() {
        let dir = tempdir().unwrap();
        assert_eq!(classify(dir.path()), DirectoryState::Empty);

        fs::create_dir(dir.path().join(".git")).unwrap();
        assert_eq!(classify(dir.path()), DirectoryState::Empty);
    }

    #[test]
    fn test_classify_non_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        assert_eq!(classify(dir.path()), DirectoryState::NonEmpty);

        let with_git = tempdir().unwrap();
        fs::create_dir(with_git.path().join(".git")).unwrap();
        fs::write(with_git.path().join("README.md"), "hi").unwrap();
        assert_eq!(classify(with_git.path()), DirectoryState::NonEmpty);
    }

    #[test]
    fn test_classify_other_single_entry_is_non_empty() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".github")).unwrap();
        assert_eq!(classify(dir.path()), DirectoryState::NonEmpty);
    }

    #[test]
    fn test_classify_unreadable_listing_is_non_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert_eq!(classify(&file), DirectoryState::NonEmpty);
    }

    #[test]
    fn test_format_target_dir() {
        assert_eq!(format_target_dir("  my-app//  "), "my-app");
        assert_eq!(format_target_dir("nested/dir/"), "nested/dir");
        assert_eq!(format_target_dir("."), ".");
        assert_eq!(format_target_dir("   "), "");
    }

    #[test]
    fn test_project_root_drops_cur_dir() {
        let cwd = Path::new("/work");
        assert_eq!(project_root(cwd, "."), PathBuf::from("/work"));
        assert_eq!(project_root(cwd, "app"), PathBuf::from("/work/app"));
        assert_eq!(project_root(cwd, "./app"), PathBuf::from("/work/app"));
    }

    #[tokio::test]
    async fn test_empty_dir_keeps_git() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("src/nested/a.ts"), "x").unwrap();

        empty_dir(dir.path()).await.unwrap();

        let left: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(left, vec![".git"]);
        assert!(dir.path().join(".git/HEAD").exists());
    }

    #[tokio::test]
    async fn test_prepare_creates_missing_parents() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("a/b/c");
        prepare(&root, false).await.unwrap();
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_without_remove_leaves_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "keep").unwrap();
        prepare(dir.path(), false).await.unwrap();
        assert!(dir.path().join("keep.txt").exists());
    }
}
