use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Regular files, and symlinks that resolve to one. Directories (linked or not) are skipped.
fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn matches_pattern(entry: &DirEntry, pattern: Option<&Regex>) -> bool {
    pattern.is_none_or(|re| re.is_match(&entry.file_name().to_string_lossy()))
}

/// Recursively lists all files below `root`, sorted by file name.
///
/// Directories are never returned; symlinks to files are kept under the
/// link's own path, symlinked directories are not followed. Hidden entries are skipped (and hidden
/// directories not descended into) unless `include_hidden` is set. When a
/// `pattern` is given, only files whose name matches it are kept. The root
/// itself is never treated as hidden, so `.` works as a starting point.
///
/// I/O errors encountered during traversal are propagated.
pub fn list_files_walkdir_filtered(
    root: &Path,
    include_hidden: bool,
    pattern: Option<&Regex>,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) if is_file_like(&entry) && matches_pattern(&entry, pattern) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "nested/c.JPG");
        touch(dir.path(), "nested/notes.txt");
        touch(dir.path(), ".hidden.jpg");
        touch(dir.path(), ".cache/d.jpg");
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        dir
    }

    #[test]
    fn test_lists_visible_files_sorted_without_directories() {
        let dir = sample_tree();
        let files = list_files_walkdir_filtered(dir.path(), false, None).unwrap();

        assert_eq!(
            relative_names(dir.path(), &files),
            vec!["a.jpg", "b.jpg", "nested/c.JPG", "nested/notes.txt"]
        );
    }

    #[test]
    fn test_includes_hidden_entries_on_request() {
        let dir = sample_tree();
        let files = list_files_walkdir_filtered(dir.path(), true, None).unwrap();

        let names = relative_names(dir.path(), &files);
        assert!(names.contains(&".hidden.jpg".to_string()));
        assert!(names.contains(&".cache/d.jpg".to_string()));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_pattern_filters_on_file_name() {
        let dir = sample_tree();
        let pattern = Regex::new(r"(?i)\.jpe?g$").unwrap();
        let files = list_files_walkdir_filtered(dir.path(), false, Some(&pattern)).unwrap();

        assert_eq!(
            relative_names(dir.path(), &files),
            vec!["a.jpg", "b.jpg", "nested/c.JPG"]
        );
    }

    #[test]
    fn test_single_file_root() {
        let dir = sample_tree();
        let file = dir.path().join("a.jpg");
        let files = list_files_walkdir_filtered(&file, false, None).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[cfg(unix)]
    #[test]
    fn test_keeps_symlinked_files_but_not_symlinked_folders() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real/a.jpg");
        let scan = dir.path().join("scan");
        fs::create_dir(&scan).unwrap();
        symlink(dir.path().join("real/a.jpg"), scan.join("link.jpg")).unwrap();
        symlink(dir.path().join("real"), scan.join("linked_folder")).unwrap();
        symlink(dir.path().join("real/missing.jpg"), scan.join("dangling.jpg")).unwrap();

        let files = list_files_walkdir_filtered(&scan, false, None).unwrap();

        assert_eq!(files, vec![scan.join("link.jpg")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = list_files_walkdir_filtered(&dir.path().join("missing"), false, None);
        assert!(result.is_err());
    }
}
