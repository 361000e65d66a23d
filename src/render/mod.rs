mod pdf;
pub(crate) use self::pdf::PdfCanvas;
use crate::fonts::Font;
use crate::grid::{age_label_rows, week_label_columns, GridLayout, PageSize, Point, Rect, MAX_AGE};
use crate::lifespan::WeeksLived;
use anyhow::Context;
use std::path::Path;

pub(crate) static DEFAULT_TITLE: &str = "A 90-Year Human Life in Weeks";

static AGE_CAPTION: &str = "Age";

static WEEK_CAPTION: &str = "Week of Year";

static FOOTER: &str =
    "Each box represents one week of your life. Black boxes are weeks you've lived.";

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 7.0;
const CAPTION_SIZE: f32 = 9.0;
const FOOTER_SIZE: f32 = 8.0;

const CELL_LINE_WIDTH: f32 = 0.5;

/// Gray level of cell outlines (0 is black, 1 is white)
const CELL_OUTLINE_GRAY: f32 = 0.827;

const BLACK: f32 = 0.0;

/// A drawing surface for a single page
pub(crate) trait Canvas {
    fn set_line_width(&mut self, width: f32);

    fn set_stroke_gray(&mut self, gray: f32);

    fn set_fill_gray(&mut self, gray: f32);

    /// Outline `rect` with the stroke color, additionally filling it with the
    /// fill color if `filled` is true
    fn draw_rect(&mut self, rect: Rect, filled: bool);

    /// Show `text` with its baseline starting at `origin`
    fn show_text(&mut self, font: Font, size: f32, origin: Point, text: &str);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

// Wraps a Canvas to position text relative to an anchor point
#[derive(Debug)]
struct Typesetter<'a, C> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas> Typesetter<'a, C> {
    fn new(canvas: &'a mut C) -> Self {
        Typesetter { canvas }
    }

    fn text(&mut self, font: Font, size: f32, anchor: Point, align: Align, text: &str) {
        let width = font.text_width(text, size);
        let x = match align {
            Align::Left => anchor.x,
            Align::Center => anchor.x - width / 2.0,
            Align::Right => anchor.x - width,
        };
        self.canvas.show_text(font, size, Point::new(x, anchor.y), text);
    }
}

/// Draw the whole life calendar onto `canvas`: the title, one cell per week
/// of a 90-year span (filled if already lived), the axis labels, and the
/// footer
pub(crate) fn render_calendar<C: Canvas>(
    canvas: &mut C,
    layout: &GridLayout,
    weeks: WeeksLived,
    title: &str,
) {
    canvas.set_fill_gray(BLACK);
    Typesetter::new(&mut *canvas).text(
        Font::HelveticaBold,
        TITLE_SIZE,
        layout.title_anchor(),
        Align::Center,
        title,
    );

    canvas.set_line_width(CELL_LINE_WIDTH);
    canvas.set_stroke_gray(CELL_OUTLINE_GRAY);
    canvas.set_fill_gray(BLACK);
    for cell in layout.cells() {
        canvas.draw_rect(layout.cell_rect(cell), weeks.covers(cell.index()));
    }

    let mut ts = Typesetter::new(canvas);
    for age in age_label_rows() {
        ts.text(
            Font::Helvetica,
            LABEL_SIZE,
            layout.age_label_anchor(age),
            Align::Right,
            &age.to_string(),
        );
    }
    ts.text(
        Font::Helvetica,
        LABEL_SIZE,
        layout.age_label_anchor(MAX_AGE),
        Align::Left,
        &MAX_AGE.to_string(),
    );
    for week in week_label_columns() {
        ts.text(
            Font::Helvetica,
            LABEL_SIZE,
            layout.week_label_anchor(week),
            Align::Center,
            &week.to_string(),
        );
    }

    ts.text(
        Font::HelveticaBold,
        CAPTION_SIZE,
        layout.age_caption_anchor(),
        Align::Left,
        AGE_CAPTION,
    );
    ts.text(
        Font::HelveticaBold,
        CAPTION_SIZE,
        layout.week_caption_anchor(),
        Align::Center,
        WEEK_CAPTION,
    );
    ts.text(
        Font::Helvetica,
        FOOTER_SIZE,
        layout.footer_anchor(),
        Align::Center,
        FOOTER,
    );
}

/// Render the calendar onto a landscape A4 page and save it as a PDF at
/// `path`
pub(crate) fn write_calendar(path: &Path, weeks: WeeksLived, title: &str) -> anyhow::Result<()> {
    let layout = GridLayout::new(PageSize::A4.landscape());
    tracing::debug!(
        square = layout.square(),
        left = layout.left(),
        top = layout.top(),
        "Computed grid layout"
    );
    let mut canvas = PdfCanvas::new(layout.page());
    render_calendar(&mut canvas, &layout, weeks, title);
    let bytes = canvas.finish(title);
    std::fs::write(path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), size = bytes.len(), "Wrote life calendar");
    Ok(())
}
