//! Slide deck assembly
//!
//! A deck is a title slide followed by one content slide per section,
//! in sequence order. The package is written directly as OOXML parts into
//! a zip archive; there is no template file.

mod geometry;
mod parts;
mod slide;

use std::io::{Cursor, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::SectionSequence;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::RenderError;
use parts::Layout;

pub use geometry::{SLIDE_HEIGHT, SLIDE_WIDTH};

/// Title slide text and document metadata
#[derive(Debug, Clone)]
pub struct DeckOptions {
    pub title: String,
    pub subtitle: String,
    pub created: DateTime<Utc>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            title: "Strategic Analysis".to_string(),
            subtitle: "Executive Summary".to_string(),
            created: Utc::now(),
        }
    }
}

/// A finished `.pptx` package
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDeck {
    #[serde(skip)]
    pub data: Vec<u8>,
    /// Including the title slide
    pub slide_count: usize,
}

/// Build a deck from split sections
///
/// An empty sequence yields a deck with only the title slide.
pub fn build_deck(
    sections: SectionSequence,
    options: &DeckOptions,
) -> Result<RenderedDeck, RenderError> {
    let slide_count = sections.len() + 1;
    let mut package = Package::new();

    package.add("[Content_Types].xml", &parts::content_types(slide_count))?;
    package.add("_rels/.rels", &parts::root_rels())?;
    package.add(
        "docProps/core.xml",
        &parts::core_props(&options.title, options.created),
    )?;
    package.add("docProps/app.xml", &parts::app_props(slide_count))?;
    package.add("ppt/presentation.xml", &parts::presentation(slide_count))?;
    package.add(
        "ppt/_rels/presentation.xml.rels",
        &parts::presentation_rels(slide_count),
    )?;
    package.add("ppt/slideMasters/slideMaster1.xml", &parts::slide_master())?;
    package.add(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &parts::master_rels(),
    )?;
    for layout in [Layout::Title, Layout::TitleAndContent] {
        package.add(
            &format!("ppt/slideLayouts/{}", layout.part_name()),
            &parts::slide_layout(layout),
        )?;
        package.add(
            &format!("ppt/slideLayouts/_rels/{}.rels", layout.part_name()),
            &parts::layout_rels(),
        )?;
    }
    package.add("ppt/theme/theme1.xml", &parts::theme())?;

    package.add_slide(
        1,
        Layout::Title,
        &slide::title_slide(&options.title, &options.subtitle),
    )?;
    for (idx, section) in sections.into_iter().enumerate() {
        package.add_slide(
            idx + 2,
            Layout::TitleAndContent,
            &slide::content_slide(&section),
        )?;
    }

    let data = package.finish()?;
    debug!("Built deck: {} slides, {} bytes", slide_count, data.len());

    Ok(RenderedDeck { data, slide_count })
}

struct Package {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Package {
    fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, name: &str, xml: &str) -> Result<(), RenderError> {
        self.writer.start_file(name, self.options)?;
        self.writer.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn add_slide(&mut self, number: usize, layout: Layout, xml: &str) -> Result<(), RenderError> {
        self.add(&format!("ppt/slides/slide{}.xml", number), xml)?;
        self.add(
            &format!("ppt/slides/_rels/slide{}.xml.rels", number),
            &parts::slide_rels(layout),
        )
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.writer.finish()?.into_inner())
    }
}

/// Escape text for an XML text node, dropping characters XML 1.0 forbids
pub(crate) fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| {
            matches!(c, '\t' | '\n' | '\r')
                || (*c >= '\u{20}' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect();
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}
