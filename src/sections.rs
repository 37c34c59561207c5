//! Section segmentation of flattened resume text.
//!
//! A section starts at a line that begins with its header word (matched
//! case-insensitively on word boundaries) and runs until the next line
//! that starts with a bare `word:`, or the end of the text. This is a
//! textual heuristic: a bullet such as `Note: ...` at the start of a line
//! ends the section early.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::model::Section;

/// Section name → items, always holding every [`Section::ALL`] key.
pub type SectionMap = IndexMap<String, Vec<String>>;

lazy_static! {
    static ref EXPERIENCE_HEADER: Regex = header_regex(Section::Experience);
    static ref EDUCATION_HEADER: Regex = header_regex(Section::Education);
    static ref SKILLS_HEADER: Regex = header_regex(Section::Skills);
    static ref SUMMARY_HEADER: Regex = header_regex(Section::Summary);

    /// Start of the next header line: a bare word followed by a colon.
    static ref NEXT_HEADER: Regex = Regex::new(r"\n\w+:").unwrap();

    /// A line starting with a bullet glyph; group 1 is the bullet text.
    static ref BULLET_LINE: Regex =
        Regex::new(r"(?m)^\s*[\x{2022}\x{25CF}\-*]\s*(.+)$").unwrap();
}

fn header_regex(section: Section) -> Regex {
    Regex::new(&format!(
        r"(?im)^[ \t]*\b(?:{})\b[^\n]*\n+",
        section.header_pattern()
    ))
    .unwrap()
}

fn header_for(section: Section) -> &'static Regex {
    match section {
        Section::Experience => &EXPERIENCE_HEADER,
        Section::Education => &EDUCATION_HEADER,
        Section::Skills => &SKILLS_HEADER,
        Section::Summary => &SUMMARY_HEADER,
    }
}

/// Segment text into all four sections.
///
/// Sections without a header map to an empty list; no key is ever missing.
pub fn segment(text: &str) -> SectionMap {
    Section::ALL
        .iter()
        .map(|section| (section.name().to_string(), extract_section(text, *section)))
        .collect()
}

/// Items of one section, or an empty list when its header is absent.
pub fn extract_section(text: &str, section: Section) -> Vec<String> {
    match section_span(text, section) {
        Some(span) => {
            let items = parse_section_items(span);
            log::debug!("Section '{}': {} items", section, items.len());
            items
        }
        None => {
            log::debug!("Section '{}': no header found", section);
            Vec::new()
        }
    }
}

/// Trimmed text between a section's header line and the next header line.
pub fn section_span(text: &str, section: Section) -> Option<&str> {
    let header = header_for(section).find(text)?;
    // Start on the header's final line break so a header after blank
    // lines still bounds the span.
    let rest = &text[header.end() - 1..];
    let end = NEXT_HEADER.find(rest).map_or(rest.len(), |m| m.start());
    Some(rest[..end].trim())
}

/// Split a section span into items.
///
/// Each bullet line yields its trimmed trailing text. A span without any
/// bullet line becomes a single item; an empty span yields no items.
pub fn parse_section_items(span: &str) -> Vec<String> {
    let items: Vec<String> = BULLET_LINE
        .captures_iter(span)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if !items.is_empty() {
        return items;
    }

    let whole = span.trim();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}
