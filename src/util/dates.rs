//! Calendar-date arithmetic for the "Last Month" quick filter and
//! date display.
//!
//! DESIGN
//! ======
//! Pure civil-date math so the range derivation tests run natively;
//! only [`today`] touches the browser clock.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// A plain calendar date with no time zone attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// ISO `YYYY-MM-DD` form, as the backend date filters expect.
    pub fn iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// The date one calendar month earlier, with the day clamped to the
    /// target month's length (Mar 31 -> Feb 28/29).
    pub fn one_month_earlier(self) -> CivilDate {
        let (year, month) = if self.month == 1 { (self.year - 1, 12) } else { (self.year, self.month - 1) };
        CivilDate { year, month, day: self.day.min(days_in_month(year, month)) }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Today according to the browser clock.
#[cfg(feature = "web")]
pub fn today() -> CivilDate {
    let now = js_sys::Date::new_0();
    CivilDate {
        year: now.get_full_year() as i32,
        month: now.get_month() + 1,
        day: now.get_date(),
    }
}

/// The date half of an ISO 8601 timestamp, for display.
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
