pub mod lines;
pub mod tree;

pub use tree::Section;

/// Two-pass pipeline: markdown → classified lines → pruned section tree.
/// Pure function of the input text; malformed lines are dropped, never
/// reported as errors.
pub fn parse_readme(content: &str) -> Vec<Section> {
    let lines = lines::classify_lines(content);
    tree::build_tree(&lines)
}

// ── Tests ──
