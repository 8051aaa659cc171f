use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// Bullet entry: `* [text](url)` with an optional leading decorator bracket
// like `[🔥]` and an optional `: description` tail after the url.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*\s*(?:\[.*?\]\s*)?\[(.+?)\]\((.+?)\)\s*:?\s*(.*)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkItem {
    pub text: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `## title` — opens a top-level section.
    SectionHeading(String),
    /// `### title` — opens a subsection of the current section.
    SubsectionHeading(String),
    /// `* [text](url): description` bullet entry.
    Link(LinkItem),
    /// Prose, images, malformed bullets — carries no structure.
    Other,
}

/// Split the document into trimmed lines and classify each one.
/// Blank lines and horizontal rules are dropped here, before classification.
pub fn classify_lines(content: &str) -> Vec<Line> {
    // Splitting on both characters handles \n, \r\n and bare \r alike; the
    // empty fragment a \r\n pair leaves behind is dropped with the blanks.
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("---"))
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Line {
    // ── Subsection heading: ### title ──
    if let Some(title) = line.strip_prefix("### ") {
        return Line::SubsectionHeading(title.trim().to_string());
    }

    // ── Section heading: ## title (a `### ` line never reaches this arm) ──
    if let Some(title) = line.strip_prefix("## ") {
        return Line::SectionHeading(title.trim().to_string());
    }

    // ── Bullet entry: * [text](url) ──
    if line.starts_with("* ") {
        if let Some(caps) = LINK_RE.captures(line) {
            return Line::Link(LinkItem {
                text: caps[1].trim().to_string(),
                url: caps[2].trim().to_string(),
                description: caps[3].trim().to_string(),
            });
        }
        // Bullet without a well-formed link — dropped, not an error.
    }

    Line::Other
}

// ── Tests ──
