use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::counter;
use crate::formatters;
use crate::traversal::{self, TraversalOptions, collect_files};
use crate::types::{FileRecord, Report, ScanConfig};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    if !args.path.is_dir() {
        bail!("{} is not a valid directory", args.path.display());
    }

    let mut config = ScanConfig {
        top: args.top,
        follow_symlinks: args.follow_symlinks,
        ..ScanConfig::default()
    };
    if let Some(ref list) = args.extensions {
        config.extensions = parse_extension_list(list);
    }

    let scan_root = std::path::absolute(&args.path).unwrap_or_else(|_| args.path.clone());
    println!("Scanning project: {}\n", scan_root.display());
    println!("Counting lines in files...");

    let opts = TraversalOptions {
        follow_symlinks: config.follow_symlinks,
        extensions: config.extensions.clone(),
        exclude_dirs: config.exclude_dirs.clone(),
    };
    let files = collect_files(&args.path, &opts)?;
    if args.verbose > 0 {
        eprintln!("Found {} candidate files", files.len());
    }

    let pb = if args.progress {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} files {wide_bar} {eta}")
                .unwrap()
                .tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        Some(pb)
    } else {
        None
    };

    let mut records = Vec::new();
    for path in &files {
        // A file that cannot be read counts as zero lines and is dropped
        // below; the scan itself keeps going.
        let lines = match counter::count_lines(path) {
            Ok(n) => n,
            Err(err) => {
                eprintln!("Error reading {}: {err:#}", path.display());
                0
            }
        };
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
        if lines == 0 {
            continue;
        }
        let extension = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or_else(String::new, |n| traversal::extension_of(n).to_string());
        records.push(FileRecord {
            path: path.clone(),
            lines,
            extension,
        });
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if records.is_empty() {
        bail!("No code files found.");
    }
    if args.verbose > 1 {
        eprintln!("{} files with at least one line", records.len());
    }

    let report = Report::from_records(records, config.top);
    println!("{}", formatters::table::format(&report, &args.path));
    Ok(())
}

fn parse_extension_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!(".{}", t.trim_start_matches('.')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_list_normalizes_dots() {
        let set = parse_extension_list("py, .ts,rs,,");
        assert_eq!(set.len(), 3);
        assert!(set.contains(".py"));
        assert!(set.contains(".ts"));
        assert!(set.contains(".rs"));
    }
}
