use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::Transaction;

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Calendar day of a stored transaction timestamp. Timestamps are written
/// as RFC 3339 with a leading `YYYY-MM-DD`, so the date is the prefix.
pub fn transaction_date(transaction: &Transaction) -> Option<NaiveDate> {
    parse_iso_date(transaction.date.get(..10)?)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Wraps a 0-11 month index backwards across the year boundary.
pub const fn months_back(month: u32, back: u32) -> u32 {
    (month + 12 - (back % 12)) % 12
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
