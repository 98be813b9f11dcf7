//! CLI output formatting.
//!
//! Each moved post is shown by name with its new location and the index files
//! written for it as indented context:
//!
//! ```text
//! 001 2023-05-01-hello.md → 2023/05/01/
//!     Index: 2023/_index.md
//!     Index: 2023/05/_index.md
//!     Index: 2023/05/01/_index.md
//! Skipped _index.md (reserved)
//!
//! Moved 1 post, wrote 3 index files, skipped 1 entry
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers write
//! them to stdout.

use crate::nest::{NestEvent, NestReport, SkipReason};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display a relative path with `/` separators on every platform.
fn display_rel(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format the event stream of one pass.
///
/// Index writes are buffered and shown under the post they belong to, which
/// is only known once its `Moved` event arrives.
pub fn format_events(events: &[NestEvent]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending_indexes: Vec<String> = Vec::new();
    let mut moved = 0;

    for event in events {
        match event {
            NestEvent::IndexWritten { path } => {
                pending_indexes.push(format!("{}Index: {}", indent(1), display_rel(path)));
            }
            NestEvent::Moved { name, to } => {
                moved += 1;
                let dir = to.parent().map(display_rel).unwrap_or_default();
                lines.push(format!("{} {} → {}/", format_index(moved), name, dir));
                lines.append(&mut pending_indexes);
            }
            NestEvent::Skipped { name, reason } => {
                let why = match reason {
                    SkipReason::Reserved => "reserved",
                    SkipReason::NotAFile => "not a file",
                };
                lines.push(format!("Skipped {} ({})", name, why));
            }
        }
    }
    // Indexes written for a post whose move then failed
    lines.append(&mut pending_indexes);
    lines
}

/// One-line summary of a completed pass.
pub fn format_summary(report: &NestReport) -> String {
    format!(
        "Moved {}, wrote {}, skipped {}",
        plural(report.moved.len(), "post", "posts"),
        plural(report.index_writes, "index file", "index files"),
        plural(report.skipped, "entry", "entries"),
    )
}

pub fn print_events(events: &[NestEvent]) {
    for line in format_events(events) {
        println!("{}", line);
    }
}

pub fn print_summary(report: &NestReport) {
    println!();
    println!("{}", format_summary(report));
}
