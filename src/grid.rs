//! Page geometry for the life calendar.
//!
//! All coordinates are PostScript points with the origin at the bottom-left
//! corner of the page, as in PDF.
use std::iter::successors;

/// Number of columns in the grid
pub(crate) const WEEKS_PER_YEAR: u16 = 52;

/// Number of rows in the grid
pub(crate) const MAX_AGE: u16 = 90;

pub(crate) const TOTAL_WEEKS: u32 = WEEKS_PER_YEAR as u32 * MAX_AGE as u32;

/// Rows and columns are labelled every this many cells
pub(crate) const LABEL_STEP: u16 = 5;

/// One millimetre in points
pub(crate) const MM: f32 = 72.0 / 25.4;

/// Blank space around every edge of the page
pub(crate) const MARGIN: f32 = 15.0 * MM;

/// Band to the left of the grid reserved for the age labels
pub(crate) const LEFT_LABEL_BAND: f32 = 20.0 * MM;

/// Band above the grid reserved for the week labels
pub(crate) const TOP_LABEL_BAND: f32 = 15.0 * MM;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PageSize {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl PageSize {
    /// ISO A4 in portrait orientation
    pub(crate) const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };

    pub(crate) fn landscape(self) -> PageSize {
        PageSize {
            width: self.width.max(self.height),
            height: self.width.min(self.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Point {
    pub(crate) const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// An axis-aligned rectangle given by its bottom-left corner and size
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Rect {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// One week of one year of the grid
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) age: u16,
    pub(crate) week: u16,
}

impl Cell {
    /// Zero-based position of the cell across the whole grid in row-major
    /// order
    pub(crate) fn index(self) -> u32 {
        u32::from(self.age) * u32::from(WEEKS_PER_YEAR) + u32::from(self.week)
    }
}

/// Placement of the square-celled grid on a page.  The grid is as large as
/// the usable area permits without stretching and is centered within it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GridLayout {
    page: PageSize,
    square: f32,
    left: f32,
    top: f32,
}

impl GridLayout {
    pub(crate) fn new(page: PageSize) -> GridLayout {
        let usable_width = page.width - 2.0 * MARGIN - LEFT_LABEL_BAND;
        let usable_height = page.height - 2.0 * MARGIN - TOP_LABEL_BAND;
        let square = (usable_width / f32::from(WEEKS_PER_YEAR))
            .min(usable_height / f32::from(MAX_AGE));
        let grid_width = square * f32::from(WEEKS_PER_YEAR);
        let grid_height = square * f32::from(MAX_AGE);
        GridLayout {
            page,
            square,
            left: MARGIN + LEFT_LABEL_BAND + (usable_width - grid_width) / 2.0,
            top: page.height - MARGIN - TOP_LABEL_BAND - (usable_height - grid_height) / 2.0,
        }
    }

    pub(crate) fn page(&self) -> PageSize {
        self.page
    }

    /// Side length of a single cell
    pub(crate) fn square(&self) -> f32 {
        self.square
    }

    /// X coordinate of the grid's left edge
    pub(crate) fn left(&self) -> f32 {
        self.left
    }

    /// Y coordinate of the grid's top edge
    pub(crate) fn top(&self) -> f32 {
        self.top
    }

    pub(crate) fn grid_width(&self) -> f32 {
        self.square * f32::from(WEEKS_PER_YEAR)
    }

    pub(crate) fn grid_height(&self) -> f32 {
        self.square * f32::from(MAX_AGE)
    }

    /// All cells of the grid, row by row
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> {
        (0..MAX_AGE).flat_map(|age| (0..WEEKS_PER_YEAR).map(move |week| Cell { age, week }))
    }

    pub(crate) fn cell_rect(&self, cell: Cell) -> Rect {
        Rect {
            x: self.left + f32::from(cell.week) * self.square,
            y: self.top - f32::from(cell.age) * self.square - self.square,
            width: self.square,
            height: self.square,
        }
    }

    /// Baseline anchor of the label for the given age.  Ages below
    /// [`MAX_AGE`] are right-aligned against the left edge of the grid; the
    /// final age boundary sits against the right edge instead.
    pub(crate) fn age_label_anchor(&self, age: u16) -> Point {
        let y = self.top - f32::from(age) * self.square - self.square / 2.0 - MM;
        let x = if age < MAX_AGE {
            self.left - 5.0 * MM
        } else {
            self.left + self.grid_width() + 5.0 * MM
        };
        Point::new(x, y)
    }

    /// Baseline anchor, to be centered on, of the label for the given
    /// one-based week number
    pub(crate) fn week_label_anchor(&self, week: u16) -> Point {
        Point::new(
            self.left + f32::from(week.saturating_sub(1)) * self.square + self.square / 2.0,
            self.top + 2.0 * MM,
        )
    }

    pub(crate) fn age_caption_anchor(&self) -> Point {
        Point::new(
            MARGIN + LEFT_LABEL_BAND / 4.0,
            self.top - self.grid_height() / 2.0,
        )
    }

    pub(crate) fn week_caption_anchor(&self) -> Point {
        Point::new(self.left + self.grid_width() / 2.0, self.top + 10.0 * MM)
    }

    pub(crate) fn title_anchor(&self) -> Point {
        Point::new(self.page.width / 2.0, self.page.height - MARGIN)
    }

    pub(crate) fn footer_anchor(&self) -> Point {
        Point::new(self.page.width / 2.0, MARGIN - 5.0 * MM)
    }
}

/// Rows that get an age label on the left edge: 0, 5, ..., 85
pub(crate) fn age_label_rows() -> impl Iterator<Item = u16> {
    successors(Some(0), |&age| Some(age + LABEL_STEP)).take_while(|&age| age < MAX_AGE)
}

/// Week numbers labelled along the top edge.  The first tick is shown as week
/// 1 rather than 0.
pub(crate) fn week_label_columns() -> impl Iterator<Item = u16> {
    successors(Some(0), |&week| Some(week + LABEL_STEP))
        .take_while(|&week| week <= WEEKS_PER_YEAR)
        .map(|week| week.max(1))
}
