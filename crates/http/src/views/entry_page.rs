use std::path::Path;

use base64::Engine;
use historical_news_core::Entry;
use tera::{Context, Tera};
use thiserror::Error;

const ENTRY_TEMPLATE_NAME: &str = "entry.html";
const ENTRY_TEMPLATE: &str = include_str!("entry.html");
const UNKNOWN_PLACE: &str = "an unknown place";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// PNG banner image, pre-encoded for inline `data:` URLs.
#[derive(Debug, Clone)]
pub struct LogoImage {
    base64: String,
}

impl LogoImage {
    #[must_use]
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self { base64: base64::engine::general_purpose::STANDARD.encode(bytes) }
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        std::fs::read(path).map(|bytes| Self::from_png_bytes(&bytes))
    }

    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.base64
    }
}

/// Renders the standalone page for a single entry.
pub struct EntryPageRenderer {
    tera: Tera,
    logo: Option<LogoImage>,
}

impl EntryPageRenderer {
    pub fn new(logo: Option<LogoImage>) -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_template(ENTRY_TEMPLATE_NAME, ENTRY_TEMPLATE)?;
        Ok(Self { tera, logo })
    }

    pub fn render(&self, entry: &Entry) -> Result<String, ViewError> {
        let place = entry
            .place
            .as_deref()
            .or(entry.place_corrected.as_deref())
            .unwrap_or(UNKNOWN_PLACE);

        let mut context = Context::new();
        context.insert("year", &entry.year);
        context.insert("day_month", &entry.day_month.to_string());
        context.insert("place", place);
        context.insert("content", &entry.content);
        context.insert("logo_base64", &self.logo.as_ref().map(LogoImage::as_base64));
        Ok(self.tera.render(ENTRY_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(content: &str) -> Entry {
        Entry::dated(5, NaiveDate::from_ymd_opt(1920, 6, 15).unwrap(), content)
            .with_place("Kristiania", "Oslo")
    }

    #[test]
    fn heading_names_year_day_and_place() {
        let html = EntryPageRenderer::new(None).unwrap().render(&entry("x")).unwrap();
        assert!(html.contains("In 1920 on the 15-06 in Kristiania, this newspaper was published:"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn content_newlines_become_breaks_and_markup_is_escaped() {
        let html = EntryPageRenderer::new(None)
            .unwrap()
            .render(&entry("Fire at the docks\n<b>Extra</b> edition"))
            .unwrap();
        assert!(html.contains("Fire at the docks<br>&lt;b&gt;Extra&lt;&#x2F;b&gt; edition"));
    }

    #[test]
    fn logo_is_inlined_as_data_url() {
        let logo = LogoImage::from_png_bytes(&[0x89, b'P', b'N', b'G']);
        let html = EntryPageRenderer::new(Some(logo)).unwrap().render(&entry("x")).unwrap();
        assert!(html.contains("src=\"data:image/png;base64,iVBORw==\""));
    }

    #[test]
    fn missing_place_falls_back_to_corrected_then_placeholder() {
        let renderer = EntryPageRenderer::new(None).unwrap();
        let mut e = entry("x");
        e.place = None;
        assert!(renderer.render(&e).unwrap().contains(" in Oslo, "));
        e.place_corrected = None;
        assert!(renderer.render(&e).unwrap().contains(" in an unknown place, "));
    }
}
