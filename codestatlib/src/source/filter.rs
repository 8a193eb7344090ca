//! File filtering and tree scanning.
//!
//! `ScanConfig` decides which files count as code and which directories are
//! never entered. `scan` walks a tree with that configuration and counts the
//! lines of every matching file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::data::counter::count_file_or_zero;
use crate::data::stats::{is_single_component, FileRecord};
use crate::error::CodestatError;
use crate::Result;

/// Extensions used by [`ScanConfig::default`].
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", // TypeScript/JavaScript
    "swift", // macOS/iOS
    "kt", "java", // Android
    "py", "sh", // scripts
];

/// Directory names skipped by [`ScanConfig::default`].
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    ".turbo",
    "out",
    ".worktrees",
    "vendor",
    "Pods",
    "DerivedData",
    ".gradle",
    ".idea",
];

/// Configuration for which files a scan counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Lowercase extensions without the leading dot
    extensions: BTreeSet<String>,
    /// Directory names that are never descended into
    excluded_dirs: BTreeSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Create an empty config: no extensions (nothing is counted) and no
    /// excluded directories.
    pub fn new() -> Self {
        Self {
            extensions: BTreeSet::new(),
            excluded_dirs: BTreeSet::new(),
        }
    }

    /// Add an extension. A leading dot is accepted (`.ts` and `ts` are the same).
    pub fn extension(mut self, ext: &str) -> Result<Self> {
        let trimmed = ext.strip_prefix('.').unwrap_or(ext);
        if !is_single_component(trimmed) || trimmed.contains('.') {
            return Err(CodestatError::InvalidExtension(ext.to_string()));
        }
        self.extensions.insert(trimmed.to_lowercase());
        Ok(self)
    }

    /// Add multiple extensions.
    pub fn extensions(mut self, exts: &[&str]) -> Result<Self> {
        for ext in exts {
            self = self.extension(ext)?;
        }
        Ok(self)
    }

    /// Add a directory name to skip.
    pub fn exclude_dir(mut self, name: &str) -> Result<Self> {
        if !is_single_component(name) {
            return Err(CodestatError::InvalidDirName(name.to_string()));
        }
        self.excluded_dirs.insert(name.to_string());
        Ok(self)
    }

    /// Add multiple directory names to skip.
    pub fn exclude_dirs(mut self, names: &[&str]) -> Result<Self> {
        for name in names {
            self = self.exclude_dir(name)?;
        }
        Ok(self)
    }

    /// Check if a file has one of the configured extensions (case-insensitive).
    pub fn matches_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }

    /// Check if a directory name is excluded. Names match exactly.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        // Always enter the root, whatever its name
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if self.is_excluded_dir(&name) {
            debug!(dir = %entry.path().display(), "pruned excluded directory");
            return false;
        }
        true
    }
}

/// Scan a tree and count the lines of every matching file.
///
/// Excluded directories are pruned, so nothing beneath them is visited.
/// Files that cannot be read are recorded with 0 lines, and entries that
/// cannot be listed are skipped; the scan itself never fails. A missing root
/// yields no records. Records come back in walk order, with the entries of
/// each directory sorted by file name.
///
/// # Example
///
/// ```rust
/// use codestatlib::{scan, ScanConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("node_modules")).unwrap();
/// fs::write(dir.path().join("a.py"), "x = 1\ny = 2\n").unwrap();
/// fs::write(dir.path().join("node_modules/dep.js"), "module.exports = 1;\n").unwrap();
/// fs::write(dir.path().join("notes.md"), "# Notes\n").unwrap();
///
/// let records = scan(dir.path(), &ScanConfig::default());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].path, std::path::Path::new("a.py"));
/// assert_eq!(records[0].lines, 2);
/// ```
pub fn scan(root: impl AsRef<Path>, config: &ScanConfig) -> Vec<FileRecord> {
    let root = root.as_ref();

    if !root.exists() {
        warn!(root = %root.display(), "scan root does not exist");
        return Vec::new();
    }

    let mut records = Vec::new();

    if root.is_file() {
        if config.matches_file(root) {
            let name = root.file_name().map(PathBuf::from).unwrap_or_default();
            records.push(FileRecord::new(name, count_file_or_zero(root)));
        }
        return records;
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| config.keep_entry(e));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !is_countable(&entry) || !config.matches_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        records.push(FileRecord::new(relative, count_file_or_zero(path)));
    }

    info!(
        root = %root.display(),
        files = records.len(),
        "scan complete"
    );

    records
}

/// Regular files and symlinks that do not lead to a directory.
///
/// A dangling symlink is countable; opening it fails and it records 0 lines.
fn is_countable(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_lines(root: &Path, rel: &str, lines: usize) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "line\n".repeat(lines)).unwrap();
    }

    fn paths(records: &[FileRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_matches_file_case_insensitive() {
        let config = ScanConfig::default();

        assert!(config.matches_file(Path::new("src/app.ts")));
        assert!(config.matches_file(Path::new("src/App.TSX")));
        assert!(config.matches_file(Path::new("run.SH")));
        assert!(!config.matches_file(Path::new("README.md")));
        assert!(!config.matches_file(Path::new("Makefile")));
        assert!(!config.matches_file(Path::new(".py")));
    }

    #[test]
    fn test_extension_accepts_leading_dot() {
        let config = ScanConfig::new().extensions(&[".RS", "toml"]).unwrap();

        assert!(config.matches_file(Path::new("lib.rs")));
        assert!(config.matches_file(Path::new("Cargo.toml")));
        assert!(!config.matches_file(Path::new("main.py")));
    }

    #[test]
    fn test_extension_is_lowercased() {
        let config = ScanConfig::new().extension("TS").unwrap();

        assert!(config.matches_file(Path::new("a.ts")));
        assert!(config.matches_file(Path::new("b.Ts")));
    }

    #[test]
    fn test_invalid_config_values() {
        assert!(matches!(
            ScanConfig::new().extension(""),
            Err(CodestatError::InvalidExtension(_))
        ));
        assert!(matches!(
            ScanConfig::new().extension("tar.gz"),
            Err(CodestatError::InvalidExtension(_))
        ));
        assert!(matches!(
            ScanConfig::new().exclude_dir("a/b"),
            Err(CodestatError::InvalidDirName(_))
        ));
    }

    #[test]
    fn test_scan_prunes_excluded_dirs() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "a.py", 5);
        write_lines(temp.path(), "b.ts", 1500);
        write_lines(temp.path(), "node_modules/c.js", 9999);
        write_lines(temp.path(), "src/node_modules/deep/d.js", 3);
        write_lines(temp.path(), ".git/hooks/pre-commit.sh", 3);

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(paths(&records), vec!["a.py", "b.ts"]);
        assert_eq!(records[0].lines, 5);
        assert_eq!(records[1].lines, 1500);
    }

    #[test]
    fn test_scan_filters_extensions() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "src/app.TS", 2);
        write_lines(temp.path(), "src/style.css", 2);
        write_lines(temp.path(), "README.md", 2);

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(paths(&records), vec!["src/app.TS"]);
    }

    #[test]
    fn test_scan_custom_config() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "src/lib.rs", 3);
        write_lines(temp.path(), "target/debug/gen.rs", 3);
        write_lines(temp.path(), "node_modules/x.rs", 3);
        write_lines(temp.path(), "app.ts", 3);

        let config = ScanConfig::new()
            .extension("rs")
            .unwrap()
            .exclude_dir("target")
            .unwrap();
        let records = scan(temp.path(), &config);

        assert_eq!(paths(&records), vec!["node_modules/x.rs", "src/lib.rs"]);
    }

    #[test]
    fn test_scan_root_named_like_excluded_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("build");
        write_lines(&root, "main.py", 1);

        let records = scan(&root, &ScanConfig::default());

        assert_eq!(paths(&records), vec!["main.py"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = tempdir().unwrap();

        assert!(scan(temp.path(), &ScanConfig::default()).is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = tempdir().unwrap();

        assert!(scan(temp.path().join("nope"), &ScanConfig::default()).is_empty());
    }

    #[test]
    fn test_scan_single_file() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "tool.py", 4);

        let records = scan(temp.path().join("tool.py"), &ScanConfig::default());

        assert_eq!(records, vec![FileRecord::new("tool.py", 4)]);
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let temp = tempdir().unwrap();
        for name in ["c.py", "a.py", "b/z.py", "b/a.py"] {
            write_lines(temp.path(), name, 1);
        }

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(paths(&records), vec!["a.py", "b/a.py", "b/z.py", "c.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_keeps_unreadable_file_with_zero_lines() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "a.py", 1);
        std::os::unix::fs::symlink(temp.path().join("gone.py"), temp.path().join("broken.py"))
            .unwrap();

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(
            records,
            vec![FileRecord::new("a.py", 1), FileRecord::new("broken.py", 0)]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlinked_directories() {
        let temp = tempdir().unwrap();
        write_lines(temp.path(), "real/a.py", 2);
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link.py"))
            .unwrap();

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(paths(&records), vec!["real/a.py"]);
    }

    #[test]
    fn test_scan_non_utf8_content() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("bin.js"), b"\xff\xfe\n\x00\x01\n").unwrap();

        let records = scan(temp.path(), &ScanConfig::default());

        assert_eq!(records[0].lines, 2);
    }
}
