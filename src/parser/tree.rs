use serde::Serialize;

use super::lines::{Line, LinkItem};

/// Boilerplate headings that never become sections. A bullet after one of
/// these attaches to nothing until the next valid heading.
const EXCLUDED_SECTIONS: &[&str] = &[
    "Repository Introduction",
    "Contribute",
    "License",
    "Stargazers over time",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subsection {
    pub title: String,
    pub links: Vec<LinkItem>,
}

/// Assemble classified lines into a section tree in one forward pass,
/// tracking the current section and subsection, then prune empty nodes.
pub fn build_tree(lines: &[Line]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;
    let mut current_sub: Option<usize> = None;

    for line in lines {
        match line {
            Line::SectionHeading(title) => {
                if EXCLUDED_SECTIONS.contains(&title.as_str()) {
                    // Suppress everything until the next valid heading.
                    current = None;
                    current_sub = None;
                    continue;
                }
                sections.push(Section {
                    title: title.clone(),
                    subsections: Vec::new(),
                    links: Vec::new(),
                });
                current = Some(sections.len() - 1);
                current_sub = None;
            }
            Line::SubsectionHeading(title) => {
                if let Some(sec) = current {
                    let subs = &mut sections[sec].subsections;
                    subs.push(Subsection {
                        title: title.clone(),
                        links: Vec::new(),
                    });
                    current_sub = Some(subs.len() - 1);
                } else {
                    // Subsection before any section: nothing to attach to.
                    current_sub = None;
                }
            }
            Line::Link(item) => {
                let Some(sec) = current else { continue };
                match current_sub {
                    Some(sub) => sections[sec].subsections[sub].links.push(item.clone()),
                    None => sections[sec].links.push(item.clone()),
                }
            }
            Line::Other => {}
        }
    }

    prune(sections)
}

/// Drop subsections that collected no links, then sections left with
/// neither links nor subsections. Relative order is preserved.
fn prune(mut sections: Vec<Section>) -> Vec<Section> {
    for section in &mut sections {
        section.subsections.retain(|sub| !sub.links.is_empty());
    }
    sections.retain(|s| !s.links.is_empty() || !s.subsections.is_empty());
    sections
}

// ── Tests ──
