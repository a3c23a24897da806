use std::fmt::Debug;
use std::fs;
use std::path::Path;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rect, Rgb,
};
use tracing::{debug, info};

use super::layout::{
    BAR_HEIGHT, BAR_WIDTH, BAR_X, BAR_Y, BODY_LINE_HEIGHT, BODY_SIZE, MARGIN, PAGE_HEIGHT,
    PAGE_WIDTH, SCORE_HEIGHT, SCORE_OFFSET, SCORE_SIZE, TITLE_HEIGHT, TITLE_SIZE, bar_fill_width,
    baseline_offset, body_chars_per_line, fill_rgb, sanitize, text_width, wrap_text,
};
use crate::error::{ReportError, Result};
use crate::services::renderer::{DocumentRenderer, ReportDocument};

const LAYER_NAME: &str = "Layer 1";

fn pdf_error(e: impl Debug) -> ReportError {
    ReportError::Render(format!("{e:?}"))
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Renders the report as an A4 PDF using the built-in Times faces.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Lays out `document` and returns the encoded PDF.
    pub fn render_to_bytes(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let title = sanitize(&format!("Sentiment Analysis Summary For {}", document.ticker));
        let mut page = PageWriter::new(&title)?;
        let title_font = page.fonts.title.clone();
        let score_font = page.fonts.score.clone();

        page.centered_line(&title, TITLE_SIZE, TITLE_HEIGHT, &title_font);
        page.sentiment_bar(document);

        page.y = BAR_Y + SCORE_OFFSET;
        let score_line = format!(
            "Sentiment Score: {:.2} ({})",
            document.average_score, document.label
        );
        page.centered_line(&score_line, SCORE_SIZE, SCORE_HEIGHT, &score_font);

        let max_chars = body_chars_per_line();
        let narrative = sanitize(&document.narrative);
        for paragraph in narrative.split('\n') {
            for line in wrap_text(paragraph, max_chars) {
                page.body_line(&line);
            }
        }

        debug!(pages = page.pages, "Report laid out");
        page.finish()
    }
}

impl DocumentRenderer for PdfRenderer {
    #[tracing::instrument(skip_all, fields(path = %path.display(), ticker = %document.ticker))]
    fn render(&self, document: &ReportDocument, path: &Path) -> Result<()> {
        let bytes = self.render_to_bytes(document)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;

        info!(bytes = bytes.len(), "Report written");
        Ok(())
    }
}

struct Fonts {
    title: IndirectFontRef,
    score: IndirectFontRef,
    body: IndirectFontRef,
}

/// Tracks the current page and a top-down cursor, adding pages as text
/// reaches the bottom margin.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    y: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let fonts = Fonts {
            title: doc.add_builtin_font(BuiltinFont::TimesBold).map_err(pdf_error)?,
            score: doc
                .add_builtin_font(BuiltinFont::TimesBoldItalic)
                .map_err(pdf_error)?,
            body: doc.add_builtin_font(BuiltinFont::TimesRoman).map_err(pdf_error)?,
        };
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            fonts,
            y: MARGIN,
            pages: 1,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN;
        self.pages += 1;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - MARGIN {
            self.new_page();
        }
    }

    /// Axis-aligned rectangle given top-left corner and size in page-top coordinates.
    fn rect(&self, x: f32, y: f32, width: f32, height: f32, mode: PaintMode) {
        let rect = Rect::new(
            Mm(x),
            Mm(PAGE_HEIGHT - (y + height)),
            Mm(x + width),
            Mm(PAGE_HEIGHT - y),
        )
        .with_mode(mode);
        self.layer.add_rect(rect);
    }

    fn text_at(&self, text: &str, size: f32, x: f32, baseline: f32, font: &IndirectFontRef) {
        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - baseline), font);
    }

    fn centered_line(&mut self, text: &str, size: f32, height: f32, font: &IndirectFontRef) {
        self.ensure_space(height);
        let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(MARGIN);
        self.text_at(text, size, x, self.y + baseline_offset(height, size), font);
        self.y += height;
    }

    fn body_line(&mut self, line: &str) {
        self.ensure_space(BODY_LINE_HEIGHT);
        if !line.is_empty() {
            let baseline = self.y + baseline_offset(BODY_LINE_HEIGHT, BODY_SIZE);
            self.text_at(line, BODY_SIZE, MARGIN, baseline, &self.fonts.body);
        }
        self.y += BODY_LINE_HEIGHT;
    }

    /// Outlined frame plus a fill proportional to the score, coloured by label.
    fn sentiment_bar(&mut self, document: &ReportDocument) {
        let black = rgb(0, 0, 0);
        let (r, g, b) = fill_rgb(document.label);

        self.layer.set_outline_color(black.clone());
        self.layer.set_outline_thickness(0.5);
        self.rect(BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT, PaintMode::Stroke);

        let filled = bar_fill_width(document.average_score);
        if filled > 0.0 {
            self.layer.set_fill_color(rgb(r, g, b));
            self.rect(BAR_X, BAR_Y, filled, BAR_HEIGHT, PaintMode::Fill);
        }

        // text is painted with the fill colour
        self.layer.set_fill_color(black);
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}
