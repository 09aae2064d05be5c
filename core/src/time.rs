use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};

const YEAR_BASE: i64 = 2000;

/// Reads a `DD.MM.YY` string as a calendar date in 2000..=2099.
///
/// Components outside their range roll over instead of failing: month 13 is
/// January of the next year, day 00 is the last day of the previous month.
/// Returns `None` only when the string does not have three numeric parts.
pub fn calendar_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.split('.').map(|p| p.parse::<i64>().ok());
    let day = parts.next()??;
    let month = parts.next()??;
    let year = parts.next()??;
    if parts.next().is_some() {
        return None;
    }

    let months = YEAR_BASE
        .checked_add(year)?
        .checked_mul(12)?
        .checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)
}

/// Orders two date strings most recent first.
///
/// Strings that do not read as a date sort after every real date.
pub fn compare_desc(a: &str, b: &str) -> Ordering {
    match (calendar_date(a), calendar_date(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_date_plain() {
        assert_eq!(calendar_date("20.07.19"), Some(ymd(2019, 7, 20)));
        assert_eq!(calendar_date("01.01.00"), Some(ymd(2000, 1, 1)));
        assert_eq!(calendar_date("31.12.99"), Some(ymd(2099, 12, 31)));
    }

    #[test]
    fn test_calendar_date_rolls_over() {
        // month 13 -> January next year
        assert_eq!(calendar_date("05.13.19"), Some(ymd(2020, 1, 5)));
        // month 00 -> December previous year
        assert_eq!(calendar_date("05.00.19"), Some(ymd(2018, 12, 5)));
        // day 00 -> last day of previous month
        assert_eq!(calendar_date("00.03.20"), Some(ymd(2020, 2, 29)));
        // day 31 in a 30-day month
        assert_eq!(calendar_date("31.04.19"), Some(ymd(2019, 5, 1)));
        assert_eq!(calendar_date("99.99.99"), Some(ymd(2107, 6, 7)));
    }

    #[test]
    fn test_calendar_date_rejects_garbage() {
        assert_eq!(calendar_date(""), None);
        assert_eq!(calendar_date("20.07"), None);
        assert_eq!(calendar_date("20.07.19.1"), None);
        assert_eq!(calendar_date("aa.07.19"), None);
        assert_eq!(calendar_date("99999999999999999.01.01"), None);
    }

    #[test]
    fn test_compare_desc() {
        assert_eq!(compare_desc("20.07.19", "19.07.19"), Ordering::Less);
        assert_eq!(compare_desc("19.07.19", "20.07.19"), Ordering::Greater);
        assert_eq!(compare_desc("01.01.20", "31.12.19"), Ordering::Less);
        // same calendar day, different spelling
        assert_eq!(compare_desc("31.04.19", "01.05.19"), Ordering::Equal);
        assert_eq!(compare_desc("xx", "01.05.19"), Ordering::Greater);
    }
}
