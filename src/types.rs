use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Extensions scanned when no `--ext` override is given.
pub static DEFAULT_EXTENSIONS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        ".js", ".jsx", ".css", ".py", ".ts", ".tsx", ".html", ".json", ".md",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
});

/// Directory basenames whose subtrees are pruned at any depth.
pub static EXCLUDED_DIRS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        ".git",
        ".node_modules",
        "node_modules",
        "__pycache__",
        ".venv",
        "dist",
        "build",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
});

pub const DEFAULT_TOP: usize = 10;

/// Settings for a single scan, resolved from CLI arguments plus defaults.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub extensions: HashSet<String>,
    pub exclude_dirs: HashSet<String>,
    pub top: usize,
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            extensions: DEFAULT_EXTENSIONS.clone(),
            exclude_dirs: EXCLUDED_DIRS.clone(),
            top: DEFAULT_TOP,
            follow_symlinks: false,
        }
    }
}

/// One scanned file with at least one line.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub lines: usize,
    pub extension: String,
}

#[derive(Debug, Clone)]
pub struct Report {
    /// Requested report size; `top.len()` may be smaller.
    pub limit: usize,
    pub top: Vec<FileRecord>,
    /// Sum of line counts over the reported rows only.
    pub total_lines: usize,
    /// Per-extension line sums over the reported rows, lexicographic by
    /// extension.
    pub by_extension: Vec<(String, usize)>,
}

impl Report {
    /// Selects the `limit` largest records and precomputes the aggregates
    /// the table needs. Ties on line count break toward the lexicographically
    /// smaller path so output is stable across platforms.
    pub fn from_records(mut records: Vec<FileRecord>, limit: usize) -> Self {
        records.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
        records.truncate(limit);

        let total_lines = records.iter().map(|r| r.lines).sum();

        let mut by_extension: IndexMap<String, usize> = IndexMap::new();
        for rec in &records {
            *by_extension.entry(rec.extension.clone()).or_default() += rec.lines;
        }
        by_extension.sort_keys();

        Report {
            limit,
            top: records,
            total_lines,
            by_extension: by_extension.into_iter().collect(),
        }
    }
}
