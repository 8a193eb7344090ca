//! Core data structures for scan results.
//!
//! - **FileRecord**: one scanned file, its path relative to the scan root and
//!   its line count
//! - **PackageSet**: the known top-level directories used as packages
//! - **PackageStats**: per-package file and line totals

use std::path::{Component, Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::CodestatError;
use crate::Result;

/// Package name for files outside every known package.
pub const ROOT_PACKAGE: &str = "root";

/// Package names used by [`PackageSet::default`].
pub const DEFAULT_PACKAGES: &[&str] = &[
    "src",
    "apps",
    "extensions",
    "packages",
    "scripts",
    "ui",
    "test",
    "docs",
];

/// A scanned file and its line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Number of lines in the file (0 if it could not be read).
    pub lines: u64,
}

impl FileRecord {
    /// Create a new record.
    pub fn new(path: impl Into<PathBuf>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// The final path segment, or an empty string for an empty path.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}

/// Ordered set of top-level directory names that count as packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSet {
    names: IndexSet<String>,
}

impl Default for PackageSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PackageSet {
    /// Create an empty set; every file lands in [`ROOT_PACKAGE`].
    pub fn new() -> Self {
        Self {
            names: IndexSet::new(),
        }
    }

    /// Add a package name.
    pub fn package(mut self, name: &str) -> Result<Self> {
        if !is_single_component(name) {
            return Err(CodestatError::InvalidPackageName(name.to_string()));
        }
        self.names.insert(name.to_string());
        Ok(self)
    }

    /// Add multiple package names.
    pub fn packages(mut self, names: &[&str]) -> Result<Self> {
        for name in names {
            self = self.package(name)?;
        }
        Ok(self)
    }

    /// Check whether `name` is a known package.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the package names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Classify a path that is already relative to the scan root.
    ///
    /// The first path segment decides the package. Anything else, including
    /// an empty path or a path starting with `..` or `/`, is [`ROOT_PACKAGE`].
    pub fn classify(&self, relative: &Path) -> String {
        match relative.components().next() {
            Some(Component::Normal(first)) => match first.to_str() {
                Some(name) if self.contains(name) => name.to_string(),
                _ => ROOT_PACKAGE.to_string(),
            },
            _ => ROOT_PACKAGE.to_string(),
        }
    }
}

/// Return the package for `path`, judged by its first segment under `root`.
///
/// Paths outside `root` fall back to [`ROOT_PACKAGE`] instead of failing.
///
/// # Example
///
/// ```rust
/// use codestatlib::{classify_package, PackageSet};
/// use std::path::Path;
///
/// let packages = PackageSet::default();
/// let root = Path::new("/repo");
///
/// assert_eq!(classify_package(Path::new("/repo/apps/web/main.ts"), root, &packages), "apps");
/// assert_eq!(classify_package(Path::new("/repo/tools/gen.py"), root, &packages), "root");
/// assert_eq!(classify_package(Path::new("/elsewhere/src/x.ts"), root, &packages), "root");
/// ```
pub fn classify_package(path: &Path, root: &Path, packages: &PackageSet) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => packages.classify(relative),
        Err(_) => ROOT_PACKAGE.to_string(),
    }
}

/// File and line totals for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStats {
    /// Package name, or [`ROOT_PACKAGE`].
    pub name: String,
    /// Number of files in the package.
    pub files: usize,
    /// Total lines across those files.
    pub lines: u64,
}

impl PackageStats {
    /// Create empty stats for a package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: 0,
            lines: 0,
        }
    }

    /// Fold one file into the totals.
    pub fn add_file(&mut self, lines: u64) {
        self.files += 1;
        self.lines += lines;
    }

    /// Average lines per file, 0 for an empty package.
    pub fn average(&self) -> u64 {
        average(self.lines, self.files)
    }
}

/// Aggregate records into per-package totals.
///
/// The result is sorted by descending line total; packages with equal
/// totals keep the order in which they were first seen.
pub fn aggregate_packages(records: &[FileRecord], packages: &PackageSet) -> Vec<PackageStats> {
    let mut by_name: IndexMap<String, PackageStats> = IndexMap::new();

    for record in records {
        let name = packages.classify(&record.path);
        by_name
            .entry(name.clone())
            .or_insert_with(|| PackageStats::new(name))
            .add_file(record.lines);
    }

    let mut stats: Vec<PackageStats> = by_name.into_values().collect();
    stats.sort_by(|a, b| b.lines.cmp(&a.lines));
    stats
}

/// Integer average that yields 0 instead of dividing by zero.
pub fn average(lines: u64, files: usize) -> u64 {
    if files == 0 {
        0
    } else {
        lines / files as u64
    }
}

/// A name usable as a single directory entry.
pub(crate) fn is_single_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains(std::path::MAIN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_package() {
        let packages = PackageSet::default();

        assert_eq!(packages.classify(Path::new("src/lib/util.ts")), "src");
        assert_eq!(packages.classify(Path::new("docs/gen.py")), "docs");
    }

    #[test]
    fn test_classify_unknown_and_top_level() {
        let packages = PackageSet::default();

        assert_eq!(packages.classify(Path::new("tools/gen.py")), ROOT_PACKAGE);
        assert_eq!(packages.classify(Path::new("setup.py")), ROOT_PACKAGE);
        assert_eq!(packages.classify(Path::new("")), ROOT_PACKAGE);
        assert_eq!(packages.classify(Path::new("../src/x.ts")), ROOT_PACKAGE);
    }

    #[test]
    fn test_classify_package_outside_root() {
        let packages = PackageSet::default();
        let root = Path::new("/repo");

        assert_eq!(
            classify_package(Path::new("/repo/src/a.ts"), root, &packages),
            "src"
        );
        assert_eq!(
            classify_package(Path::new("/other/src/a.ts"), root, &packages),
            ROOT_PACKAGE
        );
    }

    #[test]
    fn test_custom_package_set() {
        let packages = PackageSet::new().packages(&["crates", "bins"]).unwrap();

        assert_eq!(packages.classify(Path::new("crates/core/lib.rs")), "crates");
        assert_eq!(packages.classify(Path::new("src/main.rs")), ROOT_PACKAGE);
        assert_eq!(packages.iter().collect::<Vec<_>>(), vec!["crates", "bins"]);
    }

    #[test]
    fn test_invalid_package_name() {
        assert!(matches!(
            PackageSet::new().package("a/b"),
            Err(CodestatError::InvalidPackageName(_))
        ));
        assert!(PackageSet::new().package("").is_err());
    }

    #[test]
    fn test_aggregate_packages_sorted_and_summed() {
        let records = vec![
            FileRecord::new("README.sh", 4),
            FileRecord::new("src/a.ts", 100),
            FileRecord::new("apps/b.ts", 50),
            FileRecord::new("src/c.ts", 20),
            FileRecord::new("apps/d.ts", 6),
        ];

        let stats = aggregate_packages(&records, &PackageSet::default());

        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["src", "apps", "root"]);
        assert_eq!(stats[0].files, 2);
        assert_eq!(stats[0].lines, 120);
        assert_eq!(stats[0].average(), 60);

        let files: usize = stats.iter().map(|s| s.files).sum();
        let lines: u64 = stats.iter().map(|s| s.lines).sum();
        assert_eq!(files, records.len());
        assert_eq!(lines, 180);
    }

    #[test]
    fn test_aggregate_ties_keep_first_seen() {
        let records = vec![FileRecord::new("ui/a.ts", 10), FileRecord::new("docs/b.ts", 10)];

        let stats = aggregate_packages(&records, &PackageSet::default());

        assert_eq!(stats[0].name, "ui");
        assert_eq!(stats[1].name, "docs");
    }

    #[test]
    fn test_average_of_empty_package() {
        assert_eq!(PackageStats::new("src").average(), 0);
        assert_eq!(average(0, 0), 0);
        assert_eq!(average(7, 2), 3);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(FileRecord::new("src/index.ts", 1).file_name(), "index.ts");
        assert_eq!(FileRecord::new("", 1).file_name(), "");
    }
}
