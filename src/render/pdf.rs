use super::Canvas;
use crate::fonts::{encode, Font};
use crate::grid::{PageSize, Point, Rect};
use pdf_writer::{Content, Finish, Name, Pdf, Ref, Str, TextStr};
use std::fmt;

// Object numbers of the document's indirect objects
const CATALOG_ID: i32 = 1;
const PAGE_TREE_ID: i32 = 2;
const PAGE_ID: i32 = 3;
const CONTENT_ID: i32 = 4;
const INFO_ID: i32 = 5;
const FIRST_FONT_ID: i32 = 6;

static PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// A [`Canvas`] that records drawing operations into the content stream of a
/// single-page PDF document
pub(crate) struct PdfCanvas {
    page: PageSize,
    content: Content,
}

impl PdfCanvas {
    pub(crate) fn new(page: PageSize) -> PdfCanvas {
        PdfCanvas {
            page,
            content: Content::new(),
        }
    }

    /// Assemble the document and return its serialized bytes.  The output
    /// carries no timestamps, so identical drawings give identical bytes.
    pub(crate) fn finish(self, title: &str) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let page_tree_id = Ref::new(PAGE_TREE_ID);
        let page_id = Ref::new(PAGE_ID);
        let content_id = Ref::new(CONTENT_ID);
        pdf.catalog(Ref::new(CATALOG_ID)).pages(page_tree_id);
        pdf.pages(page_tree_id).kids([page_id]).count(1);

        let mut page = pdf.page(page_id);
        page.media_box(pdf_writer::Rect::new(
            0.0,
            0.0,
            self.page.width,
            self.page.height,
        ));
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, id) in font_ids() {
                fonts.pair(font.resource_name(), id);
            }
        }
        page.finish();

        for (font, id) in font_ids() {
            pdf.type1_font(id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        pdf.document_info(Ref::new(INFO_ID))
            .title(TextStr(title))
            .producer(TextStr(PRODUCER));

        pdf.stream(content_id, &self.content.finish());
        pdf.finish()
    }
}

impl fmt::Debug for PdfCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfCanvas")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

fn font_ids() -> impl Iterator<Item = (Font, Ref)> {
    std::iter::zip(Font::ALL, (FIRST_FONT_ID..).map(Ref::new))
}

impl Canvas for PdfCanvas {
    fn set_line_width(&mut self, width: f32) {
        self.content.set_line_width(width);
    }

    fn set_stroke_gray(&mut self, gray: f32) {
        self.content.set_stroke_gray(gray);
    }

    fn set_fill_gray(&mut self, gray: f32) {
        self.content.set_fill_gray(gray);
    }

    fn draw_rect(&mut self, rect: Rect, filled: bool) {
        self.content.rect(rect.x, rect.y, rect.width, rect.height);
        if filled {
            self.content.fill_nonzero_and_stroke();
        } else {
            self.content.stroke();
        }
    }

    fn show_text(&mut self, font: Font, size: f32, origin: Point, text: &str) {
        self.content
            .begin_text()
            .set_font(font.resource_name(), size)
            .next_line(origin.x, origin.y)
            .show(Str(&encode(text)))
            .end_text();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridLayout;
    use crate::lifespan::WeeksLived;
    use crate::render::{render_calendar, DEFAULT_TITLE};

    fn render(weeks: u32, title: &str) -> Vec<u8> {
        let layout = GridLayout::new(PageSize::A4.landscape());
        let mut canvas = PdfCanvas::new(layout.page());
        render_calendar(&mut canvas, &layout, WeeksLived::new(weeks), title);
        canvas.finish(title)
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        let bytes = render(1570, DEFAULT_TITLE);
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"%%EOF"));
    }

    #[test]
    fn test_pdf_fonts() {
        let bytes = render(0, DEFAULT_TITLE);
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/BaseFont /Helvetica"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
    }

    #[test]
    fn test_pdf_page_is_landscape() {
        let bytes = render(0, DEFAULT_TITLE);
        assert!(contains(&bytes, b"/MediaBox [0 0 841."));
    }

    #[test]
    fn test_pdf_deterministic() {
        assert_eq!(render(1570, DEFAULT_TITLE), render(1570, DEFAULT_TITLE));
    }

    #[test]
    fn test_pdf_fill_count_changes_output() {
        assert_ne!(render(1570, DEFAULT_TITLE), render(1571, DEFAULT_TITLE));
    }

    #[test]
    fn test_pdf_title_in_info() {
        let bytes = render(0, "My Life Journey");
        assert!(contains(&bytes, b"(My Life Journey)"));
    }
}
