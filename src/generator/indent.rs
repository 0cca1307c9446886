//! Fragment reindentation.
//!
//! Service bodies come from independently authored snippets with arbitrary
//! indentation. This module rewrites one body so the whole fragment nests two
//! spaces under a shared `services:` root, at two spaces per nesting level,
//! deriving the depth of each line from the fragment's own structure instead
//! of trusting the source indentation.
//!
//! This is a line-oriented heuristic, not a YAML parser: it assumes fragments
//! avoid multi-line flow style (`{}`/`[]`) and that block-opening lines are
//! recognizable as `key:` with no inline value. A body that breaks those
//! assumptions degrades to best-effort indentation rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches a top-level `services:` root. The trailing `\s*` also swallows the
// newline and the next line's leading whitespace, which is what promotes the
// first real key to column zero before level tracking starts.
static SERVICES_ROOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^services:\s*").unwrap());

/// Reindent one service body to canonical form: the service name line at
/// indent 2, children at 4, and so on, regardless of source indentation.
///
/// The first non-blank line, and any line immediately after a blank line, is
/// a service boundary and resets the depth. Blank lines pass through
/// unchanged and do not affect level tracking.
pub fn reindent_fragment(body: &str) -> String {
    let stripped = SERVICES_ROOT.replace_all(body, "");
    let lines: Vec<&str> = stripped.split('\n').collect();

    let mut level: usize = 0;
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            out.push((*line).to_string());
            continue;
        }

        let trimmed = line.trim();
        let is_service_line = index == 0 || lines[index - 1].trim().is_empty();

        if is_service_line {
            level = 0;
            out.push(format!("  {}", trimmed));
            continue;
        }

        let prev_trimmed = lines[index - 1].trim();
        if opens_block(prev_trimmed) {
            level += 1;
        } else {
            // Recover dedents from the fragment's own indentation deltas.
            let original = leading_width(line);
            let prev_original = leading_width(lines[index - 1]);
            if original < prev_original {
                let steps = (prev_original - original) / 2;
                level = level.saturating_sub(steps);
            }
        }

        let spaces = 2 + level * 2;
        out.push(format!("{}{}", " ".repeat(spaces), trimmed));
    }

    out.join("\n")
}

/// A line opens a nested block when it is `key:` with nothing after the
/// colon. `key: value` does not open a block.
fn opens_block(trimmed: &str) -> bool {
    trimmed.ends_with(':') && !trimmed.contains(": ")
}

fn leading_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
