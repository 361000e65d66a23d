use pdf_writer::Name;

/// Advance widths, in thousandths of an em, of the WinAnsi-encoded printable
/// ASCII range (0x20 through 0x7E) of Helvetica
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// As [`HELVETICA_WIDTHS`], for Helvetica-Bold
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance widths of the WinAnsi upper range 0xA0 through 0xFF, which
/// coincides with Latin-1, of Helvetica
#[rustfmt::skip]
static HELVETICA_UPPER_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// As [`HELVETICA_UPPER_WIDTHS`], for Helvetica-Bold
#[rustfmt::skip]
static HELVETICA_BOLD_UPPER_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Width used for bytes with no glyph in either table
const FALLBACK_WIDTH: u16 = 556;

const FIRST_PRINTABLE: u8 = 0x20;

const FIRST_UPPER: u8 = 0xA0;

/// Byte shown in place of characters that WinAnsi cannot represent
const REPLACEMENT: u8 = b'?';

/// The two standard Type 1 fonts the calendar is typeset in.  Neither needs
/// to be embedded, as every PDF reader ships them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub(crate) const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    pub(crate) fn base_font(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"Helvetica"),
            Font::HelveticaBold => Name(b"Helvetica-Bold"),
        }
    }

    /// Name under which the font is registered in a page's resources
    pub(crate) fn resource_name(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"F1"),
            Font::HelveticaBold => Name(b"F2"),
        }
    }

    fn widths(self) -> (&'static [u16; 95], &'static [u16; 96]) {
        match self {
            Font::Helvetica => (&HELVETICA_WIDTHS, &HELVETICA_UPPER_WIDTHS),
            Font::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_UPPER_WIDTHS),
        }
    }

    fn byte_width(self, byte: u8) -> u16 {
        let (ascii, upper) = self.widths();
        let width = if byte >= FIRST_UPPER {
            upper.get(usize::from(byte - FIRST_UPPER))
        } else {
            byte.checked_sub(FIRST_PRINTABLE)
                .and_then(|i| ascii.get(usize::from(i)))
        };
        width.copied().unwrap_or(FALLBACK_WIDTH)
    }

    /// Width in points of `text` when set at `size` points
    pub(crate) fn text_width(self, text: &str, size: f32) -> f32 {
        let units = encode(text)
            .into_iter()
            .map(|b| f32::from(self.byte_width(b)))
            .sum::<f32>();
        units / 1000.0 * size
    }
}

/// Encode `text` for a WinAnsi simple font.  Latin-1 characters map to
/// themselves; anything else becomes a question mark.
pub(crate) fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match u8::try_from(ch) {
            Ok(b) if (FIRST_PRINTABLE..0x7F).contains(&b) || b >= FIRST_UPPER => b,
            _ => REPLACEMENT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_digit_widths() {
        assert_close(Font::Helvetica.text_width("90", 7.0), 2.0 * 0.556 * 7.0);
        assert_close(Font::HelveticaBold.text_width("1", 10.0), 5.56);
    }

    #[test]
    fn test_regular_vs_bold() {
        let regular = Font::Helvetica.text_width("Week of Year", 9.0);
        let bold = Font::HelveticaBold.text_width("Week of Year", 9.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_empty_text() {
        assert_close(Font::Helvetica.text_width("", 16.0), 0.0);
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(Font::Helvetica.byte_width(b' '), 278);
        assert_eq!(Font::Helvetica.byte_width(b'W'), 944);
        assert_eq!(Font::Helvetica.byte_width(b'i'), 222);
        assert_eq!(Font::Helvetica.byte_width(b'~'), 584);
        assert_eq!(Font::HelveticaBold.byte_width(b'A'), 722);
        assert_eq!(Font::HelveticaBold.byte_width(b'm'), 889);
        assert_eq!(Font::Helvetica.byte_width(0x7F), FALLBACK_WIDTH);
    }

    #[test]
    fn test_latin1_glyphs() {
        assert_eq!(Font::Helvetica.byte_width(0xA0), 278);
        assert_eq!(Font::Helvetica.byte_width(0xC6), 1000);
        assert_eq!(Font::Helvetica.byte_width(0xE7), 500);
        assert_eq!(Font::Helvetica.byte_width(0xE9), 556);
        assert_eq!(Font::Helvetica.byte_width(0xFF), 500);
        assert_eq!(Font::HelveticaBold.byte_width(0xC0), 722);
        assert_eq!(Font::HelveticaBold.byte_width(0xF1), 611);
        assert_eq!(Font::HelveticaBold.byte_width(0xFF), 556);
    }

    #[test]
    fn test_accented_text_measured_like_plain() {
        // ï and ö are as wide as i and o
        assert_close(
            Font::Helvetica.text_width("na\u{ef}ve r\u{f6}le", 16.0),
            Font::Helvetica.text_width("naive role", 16.0),
        );
        assert_close(
            Font::HelveticaBold.text_width("Fran\u{e7}ois", 16.0),
            Font::HelveticaBold.text_width("Francois", 16.0),
        );
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("Age 90"), b"Age 90");
        assert_eq!(encode("caf\u{e9}"), b"caf\xe9");
        assert_eq!(encode("\u{2713} done"), b"? done");
        assert_eq!(encode("tab\there"), b"tab?here");
    }
}
