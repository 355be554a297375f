//! Reshapes free-form model output into the canonical point list used by report sections.
//!
//! Every emitted line has the form `"<index>.) <text>"`. Indices are taken verbatim from the
//! source text; lines without a leading index are folded into the point before them.

use regex::Regex;
use std::sync::OnceLock;

/// Leading index: digits followed by `.)`, `.` or `)`, then optional whitespace.
fn point_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)(?:\.\)|[.)])\s*(.*)$").expect("valid point pattern"))
}

fn format_point((index, body): (String, String)) -> String {
    format!("{}.) {}", index, body)
}

/// Normalize raw completion text into a `"N.) text"` point list, one point per line.
///
/// Empty input yields an empty string. Text with no numbered lines collapses into a single
/// point labelled `1.)`.
pub fn normalize_points(text: &str) -> String {
    let pattern = point_pattern();
    let mut points: Vec<String> = Vec::new();
    // (index, accumulated text) of the point being built
    let mut current: Option<(String, String)> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match pattern.captures(line) {
            Some(caps) => {
                if let Some(point) = current.take() {
                    points.push(format_point(point));
                }
                current = Some((caps[1].to_string(), caps[2].to_string()));
            }
            None => match current.as_mut() {
                Some((_, body)) if body.is_empty() => body.push_str(line),
                Some((_, body)) => {
                    body.push(' ');
                    body.push_str(line);
                }
                None => current = Some(("1".to_string(), line.to_string())),
            },
        }
    }

    if let Some(point) = current {
        points.push(format_point(point));
    }

    points.join("\n")
}
