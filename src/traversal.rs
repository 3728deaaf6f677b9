use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

pub struct TraversalOptions {
    pub follow_symlinks: bool,
    /// Allowed extensions, leading dot included, e.g. ".py".
    pub extensions: HashSet<String>,
    /// Directory basenames pruned at every depth below the root.
    pub exclude_dirs: HashSet<String>,
}

/// Extension of a basename: the substring from the last `.` onward, provided
/// some non-dot character precedes that dot. So `main.py` gives `.py`,
/// `archive.tar.gz` gives `.gz`, and `.gitignore` has no extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if name[..idx].bytes().any(|b| b != b'.') => &name[idx..],
        _ => "",
    }
}

/// Collects every candidate file under `root`: excluded subtrees are never
/// descended into, and only files whose extension is in the allowed set are
/// returned. Entry order is whatever the walker yields.
pub fn collect_files(root: &Path, opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(opts.follow_symlinks);

    // Prune excluded directories before descending; the root itself is
    // exempt even if its own basename matches.
    let excluded = opts.exclude_dirs.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !excluded.contains(name))
    });

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = match dent {
            Ok(d) => d,
            Err(_) => continue,
        };
        let path = dent.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = dent.file_name().to_str() else {
            continue;
        };
        if opts.extensions.contains(extension_of(name)) {
            out.push(path.to_path_buf());
        }
    }

    Ok(out)
}
