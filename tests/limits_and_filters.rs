use std::fs;
use std::path::Path;
use std::process::Output;

fn write_lines(path: &Path, n: usize) {
    fs::write(path, "line\n".repeat(n)).unwrap();
}

fn run_loctop(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_loctop"))
        .args(args)
        .output()
        .expect("run binary")
}

fn rank_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| {
            l.split_whitespace()
                .next()
                .is_some_and(|tok| tok.parse::<usize>().is_ok())
        })
        .map(str::to_string)
        .collect()
}

#[test]
fn default_limit_caps_the_table_at_ten_rows() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for i in 1..=12 {
        write_lines(&root.join(format!("f{i:02}.py")), i);
    }

    let out = run_loctop(&[root.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let rows = rank_rows(&stdout);
    assert_eq!(rows.len(), 10);
    // f01 and f02 (1 and 2 lines) fall off the bottom.
    assert!(!stdout.contains("f01.py"));
    assert!(!stdout.contains("f02.py"));
    // 3 + 4 + ... + 12
    assert!(stdout.contains("TOTAL  75"));
}

#[test]
fn top_flag_changes_the_report_size_and_title() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for i in 1..=5 {
        write_lines(&root.join(format!("f{i}.py")), i * 10);
    }

    let out = run_loctop(&[root.to_str().unwrap(), "--top", "3"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("TOP 3 FILES BY LINE COUNT"));
    let rows = rank_rows(&stdout);
    assert_eq!(rows.len(), 3);
    // 50 + 40 + 30
    assert!(stdout.contains("TOTAL  120"));
}

#[test]
fn ext_flag_overrides_the_extension_set() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_lines(&root.join("keep.rs"), 5);
    write_lines(&root.join("drop.py"), 50);

    let out = run_loctop(&[root.to_str().unwrap(), "--ext", "rs"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let rows = rank_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("keep.rs"));
    assert!(!stdout.contains("drop.py"));
}

#[test]
fn excluded_directories_are_pruned_at_every_depth() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/vendor/node_modules/pkg")).unwrap();
    fs::create_dir_all(root.join("a/b/.venv/lib")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    write_lines(&root.join("src/vendor/node_modules/pkg/huge.js"), 4000);
    write_lines(&root.join("a/b/.venv/lib/site.py"), 4000);
    write_lines(&root.join("dist/bundle.js"), 4000);
    write_lines(&root.join("src/kept.js"), 8);

    let out = run_loctop(&[root.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let rows = rank_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("kept.js"));
    assert!(!stdout.contains("huge.js"));
    assert!(!stdout.contains("site.py"));
    assert!(!stdout.contains("bundle.js"));
}

#[test]
fn verbose_reports_candidate_count_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_lines(&root.join("a.py"), 2);
    write_lines(&root.join("b.md"), 2);

    let out = run_loctop(&[root.to_str().unwrap(), "-v"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Found 2 candidate files"));
}
