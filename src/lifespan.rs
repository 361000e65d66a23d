use crate::grid::TOTAL_WEEKS;
use std::fmt;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Earliest year a birthdate may fall in
pub(crate) const MIN_YEAR: i32 = 1900;

const DAYS_IN_WEEK: i64 = 7;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BirthdateError {
    #[error("Invalid date format. Please use YYYY-MM-DD (e.g., 1990-05-15)")]
    InvalidFormat,
    #[error("Birthdate cannot be in the future")]
    FutureDate,
    #[error("Please enter a birthdate in 1900 or later")]
    TooOld,
}

/// Parse a `YYYY-MM-DD` birthdate and check that it lies between the start of
/// [`MIN_YEAR`] and `today`, inclusive.  The input must be exactly the date;
/// callers reading typed lines trim them first.
pub(crate) fn parse_birthdate(input: &str, today: Date) -> Result<Date, BirthdateError> {
    let date = Date::parse(input, &YMD_FMT).map_err(|_| BirthdateError::InvalidFormat)?;
    if date > today {
        Err(BirthdateError::FutureDate)
    } else if date.year() < MIN_YEAR {
        Err(BirthdateError::TooOld)
    } else {
        Ok(date)
    }
}

/// Number of complete weeks between a birthdate and today.  Partial weeks are
/// truncated.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct WeeksLived(u32);

impl WeeksLived {
    #[cfg(test)]
    pub(crate) const fn new(weeks: u32) -> WeeksLived {
        WeeksLived(weeks)
    }

    // Returns `None` if `birthdate` is after `today`
    pub(crate) fn between(birthdate: Date, today: Date) -> Option<WeeksLived> {
        let days = (today - birthdate).whole_days();
        if days < 0 {
            return None;
        }
        u32::try_from(days / DAYS_IN_WEEK).ok().map(WeeksLived)
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Whether the week with the given zero-based index across the whole grid
    /// has already been lived
    pub(crate) fn covers(self, index: u32) -> bool {
        index < self.0
    }

    /// Share of a full 90-year span that has been lived, as a percentage.
    /// Exceeds 100 for anyone older than 90.
    pub(crate) fn percent_of_span(self) -> f64 {
        f64::from(self.0) / f64::from(TOTAL_WEEKS) * 100.0
    }
}

/// Displays the week count with comma thousands separators, e.g. `1,570`
impl fmt::Display for WeeksLived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", group_thousands(self.0))
    }
}

pub(crate) fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{macros::date, Duration};

    const TODAY: Date = date!(2025 - 01 - 22);

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            parse_birthdate("1990-05-15", TODAY),
            Ok(date!(1990 - 05 - 15))
        );
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert_eq!(
            parse_birthdate(" 1990-05-15", TODAY),
            Err(BirthdateError::InvalidFormat)
        );
        assert_eq!(
            parse_birthdate("1990-05-15\n", TODAY),
            Err(BirthdateError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        for s in ["", "1990/05/15", "15-05-1990", "1990-13-01", "1990-02-30", "yesterday"] {
            assert_eq!(
                parse_birthdate(s, TODAY),
                Err(BirthdateError::InvalidFormat),
                "input {s:?}"
            );
        }
    }

    #[test]
    fn test_parse_future() {
        assert_eq!(
            parse_birthdate("2099-01-01", TODAY),
            Err(BirthdateError::FutureDate)
        );
        assert_eq!(
            parse_birthdate("2025-01-23", TODAY),
            Err(BirthdateError::FutureDate)
        );
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(parse_birthdate("2025-01-22", TODAY), Ok(TODAY));
    }

    #[test]
    fn test_parse_too_old() {
        assert_eq!(
            parse_birthdate("1850-01-01", TODAY),
            Err(BirthdateError::TooOld)
        );
        assert_eq!(
            parse_birthdate("1899-12-31", TODAY),
            Err(BirthdateError::TooOld)
        );
    }

    #[test]
    fn test_parse_first_allowed_day() {
        assert_eq!(
            parse_birthdate("1900-01-01", TODAY),
            Ok(date!(1900 - 01 - 01))
        );
    }

    #[test]
    fn test_weeks_thirty_years_ten_weeks() {
        let birthdate = TODAY - Duration::weeks(52 * 30 + 10);
        assert_eq!(
            WeeksLived::between(birthdate, TODAY),
            Some(WeeksLived::new(1570))
        );
    }

    #[test]
    fn test_weeks_partial_week_truncated() {
        let birthdate = TODAY - Duration::weeks(1570) - Duration::days(6);
        assert_eq!(
            WeeksLived::between(birthdate, TODAY),
            Some(WeeksLived::new(1570))
        );
    }

    #[test]
    fn test_weeks_born_today() {
        let weeks = WeeksLived::between(TODAY, TODAY).unwrap();
        assert_eq!(weeks.get(), 0);
        assert!(!weeks.covers(0));
    }

    #[test]
    fn test_weeks_future_birthdate() {
        assert_eq!(WeeksLived::between(date!(2025 - 01 - 23), TODAY), None);
    }

    #[test]
    fn test_weeks_monotonic() {
        let mut prev = None;
        let mut birthdate = date!(1900 - 01 - 01);
        while birthdate <= TODAY {
            let weeks = WeeksLived::between(birthdate, TODAY).unwrap();
            if let Some(p) = prev {
                assert!(weeks <= p, "weeks increased at {birthdate}");
            }
            prev = Some(weeks);
            birthdate += Duration::days(13);
        }
    }

    #[test]
    fn test_covers_threshold() {
        let weeks = WeeksLived::new(1570);
        assert!(weeks.covers(0));
        assert!(weeks.covers(1569));
        assert!(!weeks.covers(1570));
        assert!(!weeks.covers(4679));
    }

    #[test]
    fn test_percent_of_span() {
        assert_eq!(format!("{:.1}", WeeksLived::new(1570).percent_of_span()), "33.5");
        assert_eq!(format!("{:.1}", WeeksLived::new(0).percent_of_span()), "0.0");
        assert_eq!(format!("{:.1}", WeeksLived::new(4680).percent_of_span()), "100.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(WeeksLived::new(0).to_string(), "0");
        assert_eq!(WeeksLived::new(999).to_string(), "999");
        assert_eq!(WeeksLived::new(1570).to_string(), "1,570");
        assert_eq!(group_thousands(4680), "4,680");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
