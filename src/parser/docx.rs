//! DOCX package reader.
//!
//! A DOCX file is an OPC zip package. The main document part (usually
//! `word/document.xml`) is found through the package relationships in
//! `_rels/.rels`, and the style catalog (usually `word/styles.xml`)
//! through the main part's own relationships.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

const PACKAGE_RELS: &str = "_rels/.rels";
const DEFAULT_MAIN_PART: &str = "word/document.xml";
const DEFAULT_STYLES_PART: &str = "word/styles.xml";
const MAX_PREALLOC: u64 = 1 << 20;

/// A `w:style` entry of the style catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    /// `w:styleId`, possibly empty.
    pub id: String,
}

/// An opened DOCX package.
pub struct DocxPackage<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl DocxPackage<File> {
    /// Open a DOCX file. The file handle lives as long as the package value.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> DocxPackage<R> {
    /// Open a package from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read a part by name. `Ok(None)` when the part does not exist.
    fn read_part(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        match self.archive.by_name(name) {
            Ok(mut file) => {
                // Declared sizes are untrusted; cap the preallocation.
                let mut data = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
                file.read_to_end(&mut data)?;
                Ok(Some(data))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve the main document part name.
    pub fn main_part_name(&mut self) -> Result<String> {
        if let Some(rels) = self.read_part(PACKAGE_RELS)? {
            if let Some(target) = find_relationship(&rels, "officeDocument")? {
                return Ok(resolve_target("", &target));
            }
        }
        log::debug!("No officeDocument relationship, assuming {}", DEFAULT_MAIN_PART);
        Ok(DEFAULT_MAIN_PART.to_string())
    }

    /// Resolve the style catalog part name, relative to the main part.
    pub fn styles_part_name(&mut self, main_part: &str) -> Result<String> {
        let (dir, file) = split_part_name(main_part);
        let rels_name = if dir.is_empty() {
            format!("_rels/{}.rels", file)
        } else {
            format!("{}/_rels/{}.rels", dir, file)
        };

        if let Some(rels) = self.read_part(&rels_name)? {
            if let Some(target) = find_relationship(&rels, "styles")? {
                return Ok(resolve_target(dir, &target));
            }
        }
        Ok(DEFAULT_STYLES_PART.to_string())
    }

    /// Flattened text of the document body.
    ///
    /// Every paragraph ends with a line break; `w:tab` becomes a tab and
    /// `w:br`/`w:cr` a line break. Only `w:t` runs contribute text.
    pub fn body_text(&mut self) -> Result<String> {
        let main_part = self.main_part_name()?;
        let xml = self.read_part(&main_part)?.ok_or_else(|| {
            Error::ExtractionFailed(format!("DOCX: main document part '{}' is missing", main_part))
        })?;
        log::debug!("Reading body text from {}", main_part);
        flatten_body(&xml)
    }

    /// All `w:style` entries of the style catalog, in catalog order.
    ///
    /// A package without a style catalog has no styles.
    pub fn styles(&mut self) -> Result<Vec<StyleEntry>> {
        let main_part = self.main_part_name()?;
        let styles_part = self.styles_part_name(&main_part)?;
        match self.read_part(&styles_part)? {
            Some(xml) => parse_styles(&xml),
            None => {
                log::warn!("DOCX has no style catalog ({})", styles_part);
                Ok(Vec::new())
            }
        }
    }
}

fn flatten_body(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_body = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"body" => in_body = true,
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                b"tab" if in_body && in_run => text.push('\t'),
                b"br" | b"cr" if in_body && in_run => text.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"tab" if in_body && in_run => text.push('\t'),
                b"br" | b"cr" if in_body && in_run => text.push('\n'),
                b"p" if in_body => text.push('\n'),
                _ => {}
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"body" => in_body = false,
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" if in_body => text.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_body && in_text => text.push_str(&e.unescape()?),
            Event::CData(ref e) if in_body && in_text => {
                text.push_str(&String::from_utf8_lossy(e))
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

fn parse_styles(xml: &[u8]) -> Result<Vec<StyleEntry>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut styles = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"style" => {
                styles.push(StyleEntry {
                    id: attribute(e, b"styleId")?.unwrap_or_default(),
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(styles)
}

/// Target of the first relationship whose type ends in `/<kind>`.
fn find_relationship(xml: &[u8], kind: &str) -> Result<Option<String>> {
    let suffix = format!("/{}", kind);
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let matches = attribute(e, b"Type")?.is_some_and(|t| t.ends_with(&suffix));
                if matches {
                    return attribute(e, b"Target");
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Split `word/document.xml` into (`word`, `document.xml`).
fn split_part_name(name: &str) -> (&str, &str) {
    match name.rfind('/') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

/// Resolve a relationship target against the source part's directory.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}
