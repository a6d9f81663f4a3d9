//! Splits the backend's markdown-like reply into display sections.
//!
//! This is a line classifier, not a markdown parser. It never fails: any input
//! yields whatever sections and lines can be extracted.

use serde::Serialize;

/// Prefix that opens a section.
pub const HEADING_MARKER: &str = "###";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Paragraph(String),
    /// A single bullet. Consecutive bullets are not merged into one list.
    ListItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Split `raw` into sections at heading lines.
///
/// Text before the first heading belongs to no section and is dropped, so a
/// reply without any heading renders as nothing.
pub fn render(raw: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in raw.lines() {
        if let Some(title) = heading_title(line) {
            if let Some((title, body)) = current.take() {
                sections.push(build_section(title, &body));
            }
            current = Some((title, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((title, body)) = current {
        sections.push(build_section(title, &body));
    }

    sections
}

/// Title of a heading line, or `None` if `line` does not open a section.
fn heading_title(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix(HEADING_MARKER)?;
    match rest.chars().next() {
        None => Some(String::new()),
        Some(c) if c.is_whitespace() => Some(rest.trim().to_string()),
        Some(_) => None,
    }
}

fn build_section(title: String, body: &[&str]) -> Section {
    let blocks = body.iter().filter_map(|line| classify(line)).collect();
    Section { title, blocks }
}

fn classify(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('-'))
    {
        // Only the marker and one following whitespace character go.
        let mut chars = rest.chars();
        let item = match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str(),
            _ => rest,
        };
        return Some(Block::ListItem(item.trim_end().to_string()));
    }

    Some(Block::Paragraph(trimmed.to_string()))
}
