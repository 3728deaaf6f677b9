use std::io::IsTerminal;
use std::path::Path;

use crate::types::Report;

const TABLE_WIDTH: usize = 80;
const PATH_COL: usize = 60;
// Longer paths keep their trailing characters behind an ellipsis so the
// path column stays fixed-width.
const PATH_MAX: usize = 59;
const PATH_TAIL: usize = 56;

/// Renders the ranked table plus the per-extension breakdown. Paths are shown
/// relative to `root` where possible, otherwise as collected.
pub fn format(report: &Report, root: &Path) -> String {
    let colors = Colors::enabled();
    let banner = "=".repeat(TABLE_WIDTH);
    let rule = "-".repeat(TABLE_WIDTH);

    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(banner.clone());
    let title = format!("TOP {} FILES BY LINE COUNT", report.limit);
    lines.push(colors.bold(&center(&title, TABLE_WIDTH)));
    lines.push(banner.clone());
    lines.push(String::new());

    let header = format!(
        "{:<6} {:<8} {:<6} {:<w$}",
        "Rank",
        "Lines",
        "Ext",
        "File Path",
        w = PATH_COL
    );
    lines.push(colors.bold(&header));
    lines.push(rule.clone());

    for (idx, rec) in report.top.iter().enumerate() {
        let rank_cell = format!("{:<6}", idx + 1);
        let lines_cell = format!("{:<8}", format_num(rec.lines));
        let ext_cell = format!("{:<6}", rec.extension);
        let path_cell = format!("{:<w$}", display_path(&rec.path, root), w = PATH_COL);
        let row = [
            rank_cell,
            colors.paint(&lines_cell, "32"),
            colors.paint(&ext_cell, hue_code(stable_hash_color(&rec.extension))),
            path_cell,
        ]
        .join(" ");
        lines.push(row);
    }

    lines.push(rule);
    let total = format!("{:<6} {:<8}", "TOTAL", format_num(report.total_lines));
    lines.push(colors.paint(&total, "1;36"));
    lines.push(String::new());
    lines.push(banner);
    lines.push(String::new());

    lines.push("Breakdown by File Type:".to_string());
    lines.push("-".repeat(40));
    for (ext, count) in &report.by_extension {
        lines.push(format!("{ext:<10} {:>10} lines", format_num(*count)));
    }

    lines.join("\n")
}

fn display_path(path: &Path, root: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    truncate_path(&shown.display().to_string())
}

fn truncate_path(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= PATH_MAX {
        return s.to_string();
    }
    let tail: String = chars[chars.len() - PATH_TAIL..].iter().collect();
    format!("...{tail}")
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.len()) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

fn format_num(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn stable_hash_color(s: &str) -> u8 {
    let mut h: u32 = 0xcbf2_9ce4; // FNV-ish
    for b in s.as_bytes() {
        h ^= u32::from(*b);
        h = h.wrapping_mul(0x0100_0193);
    }
    (h as u8) % 6
}

fn hue_code(idx: u8) -> &'static str {
    match idx {
        0 => "92", // bright green
        1 => "96", // bright cyan
        2 => "93", // bright yellow
        3 => "95", // bright magenta
        4 => "94", // bright blue
        _ => "91", // bright red
    }
}

struct Colors {
    enabled: bool,
}

impl Colors {
    fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0");
        let suppressed = std::env::var_os("NO_COLOR").is_some()
            || std::env::var("CLICOLOR").is_ok_and(|v| v == "0");
        Colors {
            enabled: force || (!suppressed && std::io::stdout().is_terminal()),
        }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        self.paint(s, "1")
    }
}
